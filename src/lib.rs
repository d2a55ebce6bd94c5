//! exactum - Exact rational geometry for region comparison
//!
//! Floating point is the wrong tool for deciding whether two regions
//! overlap. This library does its geometry over arbitrary-precision
//! rationals, so containment, intersection, and area comparisons are
//! decided exactly and the answers compose.
//!
//! The building blocks:
//! - [`Rational`]: reduced fractions over big integers, with signed
//!   infinities for projective work
//! - [`Point`]: homogeneous 2D points and direction vectors
//! - [`predicates`]: orientation, betweenness, and segment intersection
//! - [`ConvexPolygon`] and [`Region`]: the convex-piece region algebra
//! - [`bounds`]: box sets, rotated boxes, circles, and ellipses

pub mod bounds;
pub mod error;
pub mod polygon;
pub mod predicates;
pub mod primitives;
pub mod rational;

pub use bounds::{BoundingBox, Circle, Ellipse, OrientedBox, Rect};
pub use error::ExactError;
pub use polygon::{ConvexPolygon, Region};
pub use predicates::{
    area_sign, collinear, intersects, intersects_properly, line_intersection, SegmentClass,
};
pub use primitives::{Extent, Point};
pub use rational::Rational;
