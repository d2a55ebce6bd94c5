//! Integer circles with exact containment and approximate overlap area.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::bounds::BoundingBox;
use crate::error::ExactError;
use crate::primitives::Point;
use crate::rational::Rational;

/// A circle with integer center and radius.
///
/// Containment is decided exactly by comparing squared distances.
/// Areas involve pi, so [`Circle::area`] and [`Circle::intersect_area`]
/// are the only floating-point results in the shape set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    x: i64,
    y: i64,
    radius: i64,
}

impl Circle {
    /// Creates a circle from its center coordinates and radius.
    #[inline]
    pub fn new(x: i64, y: i64, radius: i64) -> Self {
        Circle { x, y, radius }
    }

    #[inline]
    pub fn x(&self) -> i64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i64 {
        self.y
    }

    #[inline]
    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// The center as an exact point.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The centroid of a circle is its center.
    pub fn centroid(&self) -> Point {
        self.center()
    }

    /// True iff the point lies strictly inside the circle. Points on
    /// the boundary are outside.
    pub fn contains(&self, point: &Point) -> bool {
        let dx = &Rational::from(self.x) - &point.x;
        let dy = &Rational::from(self.y) - &point.y;
        let dist_sq = &dx.square() + &dy.square();
        let r_sq = Rational::from(self.radius).square();
        dist_sq < r_sq
    }

    /// The smallest axis-aligned box covering the circle.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.x - self.radius,
            self.y - self.radius,
            2 * self.radius,
            2 * self.radius,
        )
    }

    /// The area of the disk.
    pub fn area(&self) -> f64 {
        PI * (self.radius * self.radius) as f64
    }

    /// The area of the lens shared with another circle.
    ///
    /// Zero when the circles are disjoint or tangent; the smaller disk's
    /// area when one circle swallows the other.
    pub fn intersect_area(&self, other: &Circle) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        let d = (dx * dx + dy * dy).sqrt();
        let r1 = self.radius as f64;
        let r2 = other.radius as f64;
        if d >= r1 + r2 {
            return 0.0;
        }
        if d + r2 <= r1 {
            return other.area();
        }
        if d + r1 <= r2 {
            return self.area();
        }
        let d_sq = d * d;
        let r1_sq = r1 * r1;
        let r2_sq = r2 * r2;
        PI * ((r1_sq + r2_sq) / 2.0)
            + r2_sq * ((r1_sq - r2_sq - d_sq) / (2.0 * d * r2)).asin()
            - r1_sq * ((r1_sq - r2_sq + d_sq) / (2.0 * d * r1)).asin()
            - 0.5
                * (2.0 * (r1_sq * r2_sq + d_sq * r1_sq + d_sq * r2_sq)
                    - r1_sq * r1_sq
                    - r2_sq * r2_sq
                    - d_sq * d_sq)
                    .sqrt()
    }

    /// A copy of the circle shifted by the given offsets.
    pub fn shift(&self, dx: i64, dy: i64) -> Circle {
        Circle::new(self.x + dx, self.y + dy, self.radius)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.radius)
    }
}

impl FromStr for Circle {
    type Err = ExactError;

    /// Parses three whitespace-separated integers: `x y radius`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ExactError::Parse {
            text: s.to_string(),
        };
        let mut nums = s.split_whitespace().map(|t| t.parse::<i64>());
        let mut next = || nums.next().ok_or_else(bad)?.map_err(|_| bad());
        let circle = Circle::new(next()?, next()?, next()?);
        if nums.next().is_some() {
            return Err(bad());
        }
        Ok(circle)
    }
}
