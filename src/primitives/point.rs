//! Homogeneous points and vectors with exact coordinates.

use std::fmt;
use std::str::FromStr;

use crate::error::ExactError;
use crate::rational::Rational;

/// A homogeneous 2D point or vector: the triple `(x, y, w)`.
///
/// A true point has weight 1 and a direction vector has weight 0; the
/// difference of two points is a vector, and point-plus-vector is a point.
/// Constructors normalize any other weight by dividing it out, so every
/// stored point has `w` equal to 0 or 1.
#[derive(Debug, Clone)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: Rational,
    /// Vertical coordinate.
    pub y: Rational,
    /// Homogeneous weight: 1 for points, 0 for vectors.
    pub w: Rational,
}

impl Point {
    /// Creates a point from integer coordinates, with weight 1.
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Point {
            x: Rational::from(x),
            y: Rational::from(y),
            w: Rational::from(1),
        }
    }

    /// Creates a point or vector from exact coordinates, normalizing the
    /// weight to 1 when it is neither 0 nor 1.
    pub fn from_rationals(x: Rational, y: Rational, w: Rational) -> Self {
        if w == 0 || w == 1 {
            Point { x, y, w }
        } else {
            Point {
                x: &x / &w,
                y: &y / &w,
                w: Rational::from(1),
            }
        }
    }

    /// Creates a direction vector, with weight 0.
    #[inline]
    pub fn vector(x: Rational, y: Rational) -> Self {
        Point {
            x,
            y,
            w: Rational::from(0),
        }
    }

    /// True iff this is a direction vector rather than a point.
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.w == 0
    }

    /// Subtracts, yielding a vector from two points or a point from a
    /// point and a vector. Fails when the weights do not combine that way.
    pub fn minus(&self, other: &Point) -> Result<Point, ExactError> {
        let w = &self.w - &other.w;
        if !(w == 0 || w == 1) {
            return Err(ExactError::Weight {
                operation: "subtract",
            });
        }
        Ok(Point {
            x: &self.x - &other.x,
            y: &self.y - &other.y,
            w,
        })
    }

    /// Adds, yielding a point from point-plus-vector or a vector from two
    /// vectors. Fails when both operands are points.
    pub fn plus(&self, other: &Point) -> Result<Point, ExactError> {
        let w = &self.w + &other.w;
        if !(w == 0 || w == 1) {
            return Err(ExactError::Weight { operation: "add" });
        }
        Ok(Point {
            x: &self.x + &other.x,
            y: &self.y + &other.y,
            w,
        })
    }

    /// Dot product of the coordinate parts.
    pub fn dot(&self, other: &Point) -> Rational {
        &(&self.x * &other.x) + &(&self.y * &other.y)
    }

    /// Euclidean length of the coordinate part, as a double.
    pub fn length(&self) -> f64 {
        self.dot(self).to_f64().sqrt()
    }

    /// True iff this point lies strictly left of the directed line `a -> b`.
    pub fn is_left_of(&self, a: &Point, b: &Point) -> bool {
        crate::predicates::area_sign(a, b, self).is_positive()
    }

    /// True iff this point lies on the closed segment `a -> b`.
    ///
    /// Callers must have established collinearity already; the test only
    /// checks the coordinate extent, using y when the segment is vertical.
    pub fn between(&self, a: &Point, b: &Point) -> bool {
        debug_assert!(crate::predicates::collinear(a, b, self));
        if a.x != b.x {
            (a.x <= self.x && self.x <= b.x) || (a.x >= self.x && self.x >= b.x)
        } else {
            (a.y <= self.y && self.y <= b.y) || (a.y >= self.y && self.y >= b.y)
        }
    }
}

impl PartialEq for Point {
    /// Compares the projected coordinates, so `(2, 2, 2)` equals `(1, 1, 1)`.
    fn eq(&self, other: &Point) -> bool {
        if self.w == other.w {
            return self.x == other.x && self.y == other.y;
        }
        if self.w == 0 || other.w == 0 {
            return false;
        }
        &self.x * &other.w == &other.x * &self.w && &self.y * &other.w == &other.y * &self.w
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = ExactError;

    /// Parses a whitespace-separated coordinate pair like `"12 -3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ExactError::Parse {
            text: s.to_string(),
        };
        let mut parts = s.split_whitespace();
        let x: Rational = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let y: Rational = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        if parts.next().is_some() {
            return Err(bad());
        }
        Ok(Point {
            x,
            y,
            w: Rational::from(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizing_constructor() {
        let p = Point::from_rationals(
            Rational::from(2),
            Rational::from(4),
            Rational::from(2),
        );
        assert_eq!(p, Point::new(1, 2));
        assert_eq!(p.w, Rational::from(1));
    }

    #[test]
    fn test_projective_equality() {
        let a = Point::new(1, 1);
        let b = Point {
            x: Rational::from(2),
            y: Rational::from(2),
            w: Rational::from(2),
        };
        assert_eq!(a, b);
        assert_ne!(a, Point::new(1, 2));
        // A vector never equals a point.
        let v = Point::vector(Rational::from(1), Rational::from(1));
        assert_ne!(a, v);
    }

    #[test]
    fn test_minus_gives_vector() {
        let a = Point::new(3, 4);
        let b = Point::new(1, 1);
        let v = a.minus(&b).unwrap();
        assert!(v.is_vector());
        assert_eq!(v.x, Rational::from(2));
        assert_eq!(v.y, Rational::from(3));
        // Point plus vector is a point again.
        let back = b.plus(&v).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_point_plus_point_fails() {
        let a = Point::new(1, 0);
        assert!(matches!(
            a.plus(&a),
            Err(ExactError::Weight { operation: "add" })
        ));
    }

    #[test]
    fn test_vector_minus_point_fails() {
        let v = Point::vector(Rational::from(1), Rational::from(0));
        let p = Point::new(1, 0);
        assert!(v.minus(&p).is_err());
    }

    #[test]
    fn test_dot_and_length() {
        let v = Point::vector(Rational::from(3), Rational::from(4));
        assert_eq!(v.dot(&v), Rational::from(25));
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_is_left_of() {
        let a = Point::new(0, 0);
        let b = Point::new(10, 0);
        assert!(Point::new(5, 1).is_left_of(&a, &b));
        assert!(!Point::new(5, -1).is_left_of(&a, &b));
        // On the line is not strictly left.
        assert!(!Point::new(5, 0).is_left_of(&a, &b));
    }

    #[test]
    fn test_between() {
        let a = Point::new(0, 0);
        let b = Point::new(10, 10);
        assert!(Point::new(5, 5).between(&a, &b));
        assert!(a.between(&a, &b));
        assert!(!Point::new(11, 11).between(&a, &b));
        // Vertical segment falls back to the y extent.
        let c = Point::new(0, 10);
        assert!(Point::new(0, 4).between(&a, &c));
        assert!(!Point::new(0, 11).between(&a, &c));
    }

    #[test]
    fn test_display_and_parse() {
        let p = Point::new(12, -3);
        assert_eq!(p.to_string(), "(12 -3)");
        assert_eq!("12 -3".parse::<Point>().unwrap(), p);
        assert!("12".parse::<Point>().is_err());
        assert!("12 -3 9".parse::<Point>().is_err());
        assert!("a b".parse::<Point>().is_err());
    }
}
