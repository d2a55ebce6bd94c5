//! Exact convex-polygon algebra.
//!
//! This module provides the polygon half of the region algebra:
//! - [`ConvexPolygon`]: a counterclockwise convex vertex ring with exact
//!   area, containment, clipping, and the advancing-edge intersection
//! - [`Region`]: a set of non-overlapping convex pieces supporting union,
//!   intersection, and fragmentation queries over arbitrary coverage
//!
//! # Example
//!
//! ```
//! use exactum::polygon::ConvexPolygon;
//! use exactum::Rational;
//!
//! let square = ConvexPolygon::from_points(&[(0, 0), (2, 0), (2, 2), (0, 2)]).unwrap();
//! let offset = ConvexPolygon::from_points(&[(1, 1), (3, 1), (3, 3), (1, 3)]).unwrap();
//!
//! let shared = square.intersection(&offset).unwrap();
//! assert_eq!(shared.area(), Rational::from(1));
//! ```

mod convex;
mod region;

pub use convex::ConvexPolygon;
pub use region::Region;
