//! Axis-aligned extents used for cheap overlap rejection.

use crate::primitives::point::Point;
use crate::rational::Rational;

/// The exact axis-aligned bounding extent of a set of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Extent {
    pub min_x: Rational,
    pub min_y: Rational,
    pub max_x: Rational,
    pub max_y: Rational,
}

impl Extent {
    /// Builds the extent of a non-empty point slice.
    pub fn of(points: &[Point]) -> Option<Extent> {
        let first = points.first()?;
        let mut e = Extent {
            min_x: first.x.clone(),
            min_y: first.y.clone(),
            max_x: first.x.clone(),
            max_y: first.y.clone(),
        };
        for p in &points[1..] {
            if p.x < e.min_x {
                e.min_x.set_to(&p.x);
            }
            if p.x > e.max_x {
                e.max_x.set_to(&p.x);
            }
            if p.y < e.min_y {
                e.min_y.set_to(&p.y);
            }
            if p.y > e.max_y {
                e.max_y.set_to(&p.y);
            }
        }
        Some(e)
    }

    /// True iff the two extents overlap with positive area.
    pub fn intersects(&self, other: &Extent) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// The smallest extent covering both operands.
    pub fn union(&self, other: &Extent) -> Extent {
        let min = |a: &Rational, b: &Rational| if a < b { a.clone() } else { b.clone() };
        let max = |a: &Rational, b: &Rational| if a > b { a.clone() } else { b.clone() };
        Extent {
            min_x: min(&self.min_x, &other.min_x),
            min_y: min(&self.min_y, &other.min_y),
            max_x: max(&self.max_x, &other.max_x),
            max_y: max(&self.max_y, &other.max_y),
        }
    }

    /// The center point of the extent.
    pub fn center(&self) -> Point {
        let two = Rational::from(2);
        Point::from_rationals(
            &(&self.min_x + &self.max_x) / &two,
            &(&self.min_y + &self.max_y) / &two,
            Rational::from(1),
        )
    }
}
