//! Exact orientation and segment-intersection predicates.
//!
//! These are the O'Rourke primitives, evaluated over [`Rational`] so that
//! degenerate inputs (shared endpoints, collinear edges) classify exactly
//! instead of falling into a tolerance band.

use crate::primitives::Point;
use crate::rational::Rational;

/// How two segments meet, as reported by [`line_intersection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentClass {
    /// The segments share no points.
    None,
    /// The segments cross at a point interior to both.
    Proper,
    /// An endpoint of one segment lies on the other.
    Vertex,
    /// The segments are collinear and share at least one point.
    ///
    /// Two collinear segments meeting only at an endpoint of each still
    /// classify here, not as `Vertex`.
    CollinearOverlap,
}

/// Signed parallelogram area of `(b - a) x (c - a)`.
///
/// Positive when `c` lies left of the directed line `a -> b`, negative when
/// right, zero when the three points are collinear.
pub fn area_sign(a: &Point, b: &Point, c: &Point) -> Rational {
    &(&(&b.x - &a.x) * &(&c.y - &a.y)) - &(&(&c.x - &a.x) * &(&b.y - &a.y))
}

/// True iff the three points lie on one line.
pub fn collinear(a: &Point, b: &Point, c: &Point) -> bool {
    area_sign(a, b, c).is_zero()
}

/// True iff segments `ab` and `cd` are collinear and share at least one point.
pub fn collinear_and_overlap(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
    if !collinear(a, b, c) {
        false
    } else {
        c.between(a, b) || (collinear(a, b, d) && d.between(a, b))
    }
}

/// True iff segments `ab` and `cd` cross at a point interior to both.
pub fn intersects_properly(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
    if collinear(a, b, c) || collinear(a, b, d) || collinear(c, d, a) || collinear(c, d, b) {
        return false;
    }
    let cd_alternates_ab = c.is_left_of(a, b) ^ d.is_left_of(a, b);
    let ab_alternates_cd = a.is_left_of(c, d) ^ b.is_left_of(c, d);
    cd_alternates_ab && ab_alternates_cd
}

/// True iff segments `ab` and `cd` share any point, including endpoints
/// and collinear overlap.
pub fn intersects(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
    if intersects_properly(a, b, c, d) {
        return true;
    }
    (collinear(a, b, c) && c.between(a, b))
        || (collinear(a, b, d) && d.between(a, b))
        || (collinear(c, d, a) && a.between(c, d))
        || (collinear(c, d, b) && b.between(c, d))
}

/// Classifies how segments `ab` and `cd` meet, and computes the meeting
/// point where one exists.
///
/// Works in the parametric form `p(s) = a + s(b - a)`. Whenever the two
/// carrier lines are not parallel the returned point is the exact line
/// intersection, even when the class is [`SegmentClass::None`]; callers
/// that need the line crossing rather than the segment crossing rely on
/// this. Parallel segments return no point.
pub fn line_intersection(
    a: &Point,
    b: &Point,
    c: &Point,
    d: &Point,
) -> (SegmentClass, Option<Point>) {
    let denominator = &(&(&a.x * &(&d.y - &c.y)) + &(&b.x * &(&c.y - &d.y)))
        + &(&(&c.x * &(&a.y - &b.y)) + &(&d.x * &(&b.y - &a.y)));

    if denominator.is_zero() {
        let class = if collinear_and_overlap(a, b, c, d) {
            SegmentClass::CollinearOverlap
        } else {
            SegmentClass::None
        };
        return (class, None);
    }

    let mut class = None;

    let numerator_s = &(&a.x * &(&d.y - &c.y))
        + &(&(&c.x * &(&a.y - &d.y)) + &(&d.x * &(&c.y - &a.y)));
    if numerator_s.is_zero() || numerator_s == denominator {
        class = Some(SegmentClass::Vertex);
    }
    let s = &numerator_s / &denominator;

    let numerator_t = -&(&(&a.x * &(&c.y - &b.y))
        + &(&(&b.x * &(&a.y - &c.y)) + &(&c.x * &(&b.y - &a.y))));
    if numerator_t.is_zero() || numerator_t == denominator {
        class = Some(SegmentClass::Vertex);
    }
    let t = &numerator_t / &denominator;

    let zero = Rational::from(0);
    let one = Rational::from(1);
    if s > zero && s < one && t > zero && t < one {
        class = Some(SegmentClass::Proper);
    } else if s > one || s < zero || t > one || t < zero {
        class = Some(SegmentClass::None);
    }

    let p = Point {
        x: &a.x + &(&s * &(&b.x - &a.x)),
        y: &a.y + &(&s * &(&b.y - &a.y)),
        w: Rational::from(1),
    };
    (p_class(class), Some(p))
}

// The unresolved case can only be reached with s and t both in the closed
// unit interval but neither strictly inside, which forces an endpoint hit.
fn p_class(class: Option<SegmentClass>) -> SegmentClass {
    class.unwrap_or(SegmentClass::Vertex)
}

/// The endpoints of the shared portion of two collinear overlapping
/// segments. Returns the same point twice when they touch at one point
/// only, and `None` when the segments are not collinear-overlapping.
pub(crate) fn collinear_overlap_endpoints(
    a: &Point,
    b: &Point,
    c: &Point,
    d: &Point,
) -> Option<(Point, Point)> {
    if !collinear(a, b, c) || !collinear(a, b, d) {
        return None;
    }
    let mut shared: Vec<&Point> = Vec::new();
    for p in [c, d] {
        if p.between(a, b) {
            shared.push(p);
        }
    }
    for p in [a, b] {
        if p.between(c, d) && !shared.iter().any(|q| *q == p) {
            shared.push(p);
        }
    }
    let first = *shared.first()?;
    let second = shared.iter().find(|q| **q != first).copied().unwrap_or(first);
    Some((first.clone(), second.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_sign_orientation() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        assert!(area_sign(&a, &b, &Point::new(2, 3)).is_positive());
        assert!(area_sign(&a, &b, &Point::new(2, -3)).is_negative());
        assert!(area_sign(&a, &b, &Point::new(9, 0)).is_zero());
        // Magnitude is the parallelogram area.
        assert_eq!(area_sign(&a, &b, &Point::new(0, 2)), Rational::from(8));
    }

    #[test]
    fn test_proper_crossing() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 4);
        let c = Point::new(0, 4);
        let d = Point::new(4, 0);
        assert!(intersects_properly(&a, &b, &c, &d));
        assert!(intersects(&a, &b, &c, &d));
        let (class, p) = line_intersection(&a, &b, &c, &d);
        assert_eq!(class, SegmentClass::Proper);
        assert_eq!(p.unwrap(), Point::new(2, 2));
    }

    #[test]
    fn test_vertex_touch() {
        // d sits on the interior of ab.
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        let c = Point::new(2, 3);
        let d = Point::new(2, 0);
        assert!(!intersects_properly(&a, &b, &c, &d));
        assert!(intersects(&a, &b, &c, &d));
        let (class, p) = line_intersection(&a, &b, &c, &d);
        assert_eq!(class, SegmentClass::Vertex);
        assert_eq!(p.unwrap(), Point::new(2, 0));
    }

    #[test]
    fn test_disjoint_still_reports_line_point() {
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let c = Point::new(5, -1);
        let d = Point::new(5, 1);
        let (class, p) = line_intersection(&a, &b, &c, &d);
        assert_eq!(class, SegmentClass::None);
        // The carrier lines still cross at (5, 0).
        assert_eq!(p.unwrap(), Point::new(5, 0));
    }

    #[test]
    fn test_parallel_separated() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        let c = Point::new(0, 1);
        let d = Point::new(4, 1);
        let (class, p) = line_intersection(&a, &b, &c, &d);
        assert_eq!(class, SegmentClass::None);
        assert!(p.is_none());
        assert!(!intersects(&a, &b, &c, &d));
    }

    #[test]
    fn test_collinear_overlap() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        let c = Point::new(2, 0);
        let d = Point::new(6, 0);
        assert!(collinear_and_overlap(&a, &b, &c, &d));
        let (class, _) = line_intersection(&a, &b, &c, &d);
        assert_eq!(class, SegmentClass::CollinearOverlap);
        let (lo, hi) = collinear_overlap_endpoints(&a, &b, &c, &d).unwrap();
        let shared = [lo, hi];
        assert!(shared.contains(&Point::new(2, 0)));
        assert!(shared.contains(&Point::new(4, 0)));
    }

    #[test]
    fn test_collinear_endpoint_touch_is_overlap_not_vertex() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        let c = Point::new(4, 0);
        let d = Point::new(8, 0);
        let (class, _) = line_intersection(&a, &b, &c, &d);
        assert_eq!(class, SegmentClass::CollinearOverlap);
        let (lo, hi) = collinear_overlap_endpoints(&a, &b, &c, &d).unwrap();
        assert_eq!(lo, Point::new(4, 0));
        assert_eq!(lo, hi);
    }

    #[test]
    fn test_shared_endpoint_non_collinear_is_vertex() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        let c = Point::new(4, 0);
        let d = Point::new(6, 3);
        let (class, p) = line_intersection(&a, &b, &c, &d);
        assert_eq!(class, SegmentClass::Vertex);
        assert_eq!(p.unwrap(), Point::new(4, 0));
    }
}
