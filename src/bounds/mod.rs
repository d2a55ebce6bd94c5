//! Bounding shapes: axis-aligned box sets, rotated boxes, circles, and
//! ellipses.
//!
//! [`BoundingBox`] closes under union and intersection by becoming a
//! set of disjoint rectangles; the other shapes answer containment and
//! area queries and convert to the polygon algebra where they can.

mod bbox;
mod circle;
mod ellipse;
mod obox;

pub use bbox::{BoundingBox, Rect};
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use obox::OrientedBox;
