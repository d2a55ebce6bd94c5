//! Exact geometric primitives.

mod extent;
mod point;

pub use extent::Extent;
pub use point::Point;
