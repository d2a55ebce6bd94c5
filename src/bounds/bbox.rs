//! Axis-aligned boxes and box sets with exact set operations.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::ExactError;
use crate::polygon::{ConvexPolygon, Region};
use crate::predicates::line_intersection;
use crate::primitives::Point;
use crate::rational::Rational;

/// An integer rectangle: origin corner plus width and height.
///
/// A rectangle with non-positive width or height is empty; it covers no
/// pixels, contains no points, and intersects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    /// Creates a rectangle from its origin corner and dimensions.
    #[inline]
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// True iff the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// The covered pixel count, as an exact value.
    pub fn area(&self) -> Rational {
        if self.is_empty() {
            Rational::from(0)
        } else {
            Rational::from(BigInt::from(self.width) * BigInt::from(self.height))
        }
    }

    /// True iff the rectangles share at least one pixel. Empty rectangles
    /// intersect nothing, and shared edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// The largest rectangle inside both operands. Callers check
    /// [`Rect::intersects`] first; a disjoint pair yields an empty result.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);
        Rect::new(x, y, x2 - x, y2 - y)
    }

    /// The smallest rectangle covering both operands.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let x2 = (self.x + self.width).max(other.x + other.width);
        let y2 = (self.y + self.height).max(other.y + other.height);
        Rect::new(x, y, x2 - x, y2 - y)
    }

    /// True iff the point lies on a covered pixel: the left and bottom
    /// edges are inside, the right and top edges are not.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= Rational::from(self.x)
            && point.x < Rational::from(self.x + self.width)
            && point.y >= Rational::from(self.y)
            && point.y < Rational::from(self.y + self.height)
    }
}

/// Either a single rectangle or a set of non-overlapping rectangles.
#[derive(Debug, Clone)]
enum BoxRepr {
    Single(Rect),
    Composite(Vec<Rect>),
}

/// An axis-aligned box, or a set of non-overlapping axis-aligned boxes.
///
/// Set operations between boxes stay in the box world: intersections of
/// boxes are boxes, and unions and differences become composite sets of
/// disjoint rectangles. Operations that only make sense on one rectangle
/// (origin accessors, centroid, extension) fail with
/// [`ExactError::Composed`] when invoked on a composite set.
#[derive(Debug, Clone)]
pub struct BoundingBox {
    repr: BoxRepr,
}

impl BoundingBox {
    /// Creates a single box from its origin corner and dimensions.
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        BoundingBox {
            repr: BoxRepr::Single(Rect::new(x, y, width, height)),
        }
    }

    /// Creates the empty box at the origin.
    pub fn empty() -> Self {
        BoundingBox::new(0, 0, 0, 0)
    }

    fn composite(pieces: Vec<Rect>) -> Self {
        BoundingBox {
            repr: BoxRepr::Composite(pieces),
        }
    }

    /// Collapses a piece list to the simplest representation: empty
    /// pieces are dropped, and sets of zero or one piece become single.
    fn simplify(mut pieces: Vec<Rect>) -> Self {
        pieces.retain(|r| !r.is_empty());
        match pieces.len() {
            0 => BoundingBox::empty(),
            1 => BoundingBox {
                repr: BoxRepr::Single(pieces[0]),
            },
            _ => BoundingBox::composite(pieces),
        }
    }

    /// The rectangles covering this set; a single slice for simple boxes.
    pub fn rects(&self) -> &[Rect] {
        match &self.repr {
            BoxRepr::Single(r) => std::slice::from_ref(r),
            BoxRepr::Composite(pieces) => pieces,
        }
    }

    /// True iff this is a set of several rectangles.
    pub fn is_composite(&self) -> bool {
        matches!(self.repr, BoxRepr::Composite(_))
    }

    fn single(&self, operation: &'static str) -> Result<&Rect, ExactError> {
        match &self.repr {
            BoxRepr::Single(r) => Ok(r),
            BoxRepr::Composite(_) => Err(ExactError::Composed { operation }),
        }
    }

    /// The smallest rectangle enclosing the whole set.
    pub fn enclosing(&self) -> Rect {
        match &self.repr {
            BoxRepr::Single(r) => *r,
            BoxRepr::Composite(pieces) => {
                let mut nonempty = pieces.iter().filter(|r| !r.is_empty());
                match nonempty.next() {
                    Some(first) => nonempty.fold(*first, |acc, r| acc.union(r)),
                    None => Rect::new(0, 0, 0, 0),
                }
            }
        }
    }

    /// The total covered pixel count.
    pub fn area(&self) -> Rational {
        let mut total = Rational::from(0);
        for r in self.rects() {
            total = &total + &r.area();
        }
        total
    }

    /// The x-coordinate of the box origin. Fails for a composite set.
    pub fn x(&self) -> Result<i64, ExactError> {
        Ok(self.single("read the origin of")?.x)
    }

    /// The y-coordinate of the box origin. Fails for a composite set.
    pub fn y(&self) -> Result<i64, ExactError> {
        Ok(self.single("read the origin of")?.y)
    }

    /// The box width. Fails for a composite set.
    pub fn width(&self) -> Result<i64, ExactError> {
        Ok(self.single("read the dimensions of")?.width)
    }

    /// The box height. Fails for a composite set.
    pub fn height(&self) -> Result<i64, ExactError> {
        Ok(self.single("read the dimensions of")?.height)
    }

    /// True iff any pixel is shared between the two sets.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        match (&self.repr, &other.repr) {
            (BoxRepr::Single(a), BoxRepr::Single(b)) => a.intersects(b),
            _ => {
                if !self.enclosing().intersects(&other.enclosing()) {
                    return false;
                }
                self.rects()
                    .iter()
                    .any(|ra| other.rects().iter().any(|rb| ra.intersects(rb)))
            }
        }
    }

    /// The set of pixels covered by both operands.
    pub fn intersection(a: &BoundingBox, b: &BoundingBox) -> BoundingBox {
        if !a.enclosing().intersects(&b.enclosing()) {
            return BoundingBox::empty();
        }
        if let (BoxRepr::Single(ra), BoxRepr::Single(rb)) = (&a.repr, &b.repr) {
            return if ra.intersects(rb) {
                BoundingBox {
                    repr: BoxRepr::Single(ra.intersection(rb)),
                }
            } else {
                BoundingBox::empty()
            };
        }
        let mut pieces = Vec::new();
        for ra in a.rects() {
            for rb in b.rects() {
                if ra.intersects(rb) {
                    pieces.push(ra.intersection(rb));
                }
            }
        }
        BoundingBox::simplify(pieces)
    }

    /// The set of pixels covered by either operand, as non-overlapping
    /// rectangles.
    ///
    /// Each rectangle of `a` is checked against the accumulating cover;
    /// on overlap it is replaced by its shards outside the overlapping
    /// piece, and the shards re-enter the worklist until everything left
    /// is disjoint from the cover.
    pub fn union(a: &BoundingBox, b: &BoundingBox) -> BoundingBox {
        let mut pieces: Vec<Rect> = b.rects().to_vec();
        let mut queue: VecDeque<Rect> = a.rects().iter().copied().collect();
        let mut disjoint: Vec<Rect> = Vec::new();
        'children: while let Some(child) = queue.pop_front() {
            for piece in &pieces {
                if let Some(shards) = subtract_from(piece, &child) {
                    for shard in shards.into_iter().rev() {
                        queue.push_front(shard);
                    }
                    continue 'children;
                }
            }
            disjoint.push(child);
        }
        pieces.extend(disjoint);
        BoundingBox::simplify(pieces)
    }

    /// True iff some rectangle of the set covers the point.
    pub fn contains(&self, point: &Point) -> bool {
        if !self.enclosing().contains(point) {
            return false;
        }
        match &self.repr {
            BoxRepr::Single(_) => true,
            BoxRepr::Composite(pieces) => pieces.iter().any(|r| r.contains(point)),
        }
    }

    /// Grows this box to the smallest single box covering both operands.
    /// Fails when either side is a composite set.
    pub fn extend_to_contain(&mut self, other: &BoundingBox) -> Result<(), ExactError> {
        let theirs = *other.single("extend")?;
        let ours = *self.single("extend")?;
        let grown = if ours.is_empty() {
            theirs
        } else if theirs.is_empty() {
            ours
        } else {
            ours.union(&theirs)
        };
        self.repr = BoxRepr::Single(grown);
        Ok(())
    }

    /// The exact center point of the box. Fails for a composite set.
    pub fn centroid(&self) -> Result<Point, ExactError> {
        let r = self.single("find the centroid of")?;
        Ok(Point::from_rationals(
            &Rational::from(r.x) + &Rational::new(r.width, 2),
            &Rational::from(r.y) + &Rational::new(r.height, 2),
            Rational::from(1),
        ))
    }

    /// The point where the ray from the centroid through `toward` exits
    /// the box. Fails for a composite set.
    ///
    /// Classifies the exit side by comparing the ray's rise and run
    /// against the box diagonals, then intersects the ray with that side.
    pub fn near_intersection(&self, toward: &Point) -> Result<Point, ExactError> {
        let r = *self.single("find the near intersection of")?;
        let center = self.centroid()?;
        let rise = &toward.y - &center.y;
        let run = &toward.x - &center.x;
        let neg_rise = -&rise;
        let (a, b) = if rise.is_positive() && run < rise && run > neg_rise {
            let top = r.y + r.height;
            (Point::new(r.x, top), Point::new(r.x + r.width, top))
        } else if rise.is_negative() && run < neg_rise && run > rise {
            (Point::new(r.x, r.y), Point::new(r.x + r.width, r.y))
        } else if run.is_negative() {
            (Point::new(r.x, r.y), Point::new(r.x, r.y + r.height))
        } else {
            let right = r.x + r.width;
            (Point::new(right, r.y), Point::new(right, r.y + r.height))
        };
        let (_, p) = line_intersection(&center, toward, &a, &b);
        p.ok_or_else(|| ExactError::DegenerateRegion {
            detail: format!("no boundary crossing toward {toward}"),
        })
    }

    /// A copy of the box shifted by the given offsets. Fails for a
    /// composite set.
    pub fn shift(&self, dx: i64, dy: i64) -> Result<BoundingBox, ExactError> {
        let r = self.single("shift")?;
        Ok(BoundingBox::new(r.x + dx, r.y + dy, r.width, r.height))
    }

    /// The counterclockwise corner ring of the box. Fails for a
    /// composite set.
    pub fn to_polygon(&self) -> Result<ConvexPolygon, ExactError> {
        let r = self.single("make a polygon of")?;
        rect_polygon(r)
    }

    /// The covered pixels as a general region, one convex piece per
    /// rectangle, so composite sets can join the polygon algebra.
    pub fn to_region(&self) -> Result<Region, ExactError> {
        let mut region = Region::new();
        for r in self.rects() {
            if r.is_empty() {
                continue;
            }
            region.add_piece(rect_polygon(r)?)?;
        }
        Ok(region)
    }
}

fn rect_polygon(r: &Rect) -> Result<ConvexPolygon, ExactError> {
    ConvexPolygon::from_points(&[
        (r.x, r.y),
        (r.x + r.width, r.y),
        (r.x + r.width, r.y + r.height),
        (r.x, r.y + r.height),
    ])
}

/// Slices `lower` around `upper`: at most four strips (left, top
/// center, bottom center, right) that cover `lower` minus `upper`.
/// `None` when the rectangles do not overlap; an empty list when `lower`
/// is swallowed whole.
fn subtract_from(upper: &Rect, lower: &Rect) -> Option<Vec<Rect>> {
    if !upper.intersects(lower) {
        return None;
    }
    let mut strips = Vec::new();
    if lower.x < upper.x {
        strips.push(Rect::new(
            lower.x,
            lower.y,
            upper.x - lower.x,
            lower.height,
        ));
    }
    if lower.y + lower.height > upper.y + upper.height {
        let x = upper.x.max(lower.x);
        let y = upper.y + upper.height;
        strips.push(Rect::new(
            x,
            y,
            (lower.x + lower.width).min(upper.x + upper.width) - x,
            lower.y + lower.height - y,
        ));
    }
    if lower.y < upper.y {
        let x = upper.x.max(lower.x);
        strips.push(Rect::new(
            x,
            lower.y,
            (lower.x + lower.width).min(upper.x + upper.width) - x,
            upper.y - lower.y,
        ));
    }
    if lower.x + lower.width > upper.x + upper.width {
        let x = upper.x + upper.width;
        strips.push(Rect::new(
            x,
            lower.y,
            lower.x + lower.width - x,
            lower.height,
        ));
    }
    Some(strips)
}

impl PartialEq for BoundingBox {
    /// Two single boxes compare by their rectangles; any other pairing
    /// compares the covered area, so differently-sliced sets covering
    /// the same pixels are equal.
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (BoxRepr::Single(a), BoxRepr::Single(b)) => a == b,
            _ => {
                let shared = BoundingBox::intersection(self, other).area();
                shared == self.area() && shared == other.area()
            }
        }
    }
}

impl fmt::Display for BoundingBox {
    /// A single box renders as `x y width height`; a composite set as
    /// `[(x y w h)(x y w h)...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            BoxRepr::Single(r) => {
                write!(f, "{} {} {} {}", r.x, r.y, r.width, r.height)
            }
            BoxRepr::Composite(pieces) => {
                write!(f, "[")?;
                for r in pieces {
                    write!(f, "({} {} {} {})", r.x, r.y, r.width, r.height)?;
                }
                write!(f, "]")
            }
        }
    }
}

fn parse_rect(text: &str, whole: &str) -> Result<Rect, ExactError> {
    let bad = || ExactError::Parse {
        text: whole.to_string(),
    };
    let mut nums = text.split_whitespace().map(|t| t.parse::<i64>());
    let mut next = || nums.next().ok_or_else(bad)?.map_err(|_| bad());
    let r = Rect::new(next()?, next()?, next()?, next()?);
    if nums.next().is_some() {
        return Err(bad());
    }
    Ok(r)
}

impl FromStr for BoundingBox {
    type Err = ExactError;

    /// Parses either the four-integer single form or the bracketed
    /// composite form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ExactError::Parse {
            text: s.to_string(),
        };
        let text = s.trim();
        if let Some(inner) = text.strip_prefix('[') {
            let inner = inner.strip_suffix(']').ok_or_else(bad)?;
            let mut pieces = Vec::new();
            let mut rest = inner.trim_start();
            while !rest.is_empty() {
                if !rest.starts_with('(') {
                    return Err(bad());
                }
                let close = rest.find(')').ok_or_else(bad)?;
                pieces.push(parse_rect(&rest[1..close], s)?);
                rest = rest[close + 1..].trim_start();
            }
            Ok(BoundingBox::simplify(pieces))
        } else {
            Ok(BoundingBox {
                repr: BoxRepr::Single(parse_rect(text, s)?),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_semantics() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(1, 1, 2, 2);
        let c = Rect::new(2, 0, 2, 2);
        assert!(a.intersects(&b));
        // Edge-adjacent boxes share no pixel.
        assert!(!a.intersects(&c));
        assert_eq!(a.intersection(&b), Rect::new(1, 1, 1, 1));
        assert_eq!(a.union(&c), Rect::new(0, 0, 4, 2));
        // Empty rectangles intersect nothing, not even themselves.
        let empty = Rect::new(5, 5, 0, 3);
        assert!(empty.is_empty());
        assert!(!empty.intersects(&empty));
        assert_eq!(empty.area(), Rational::from(0));
    }

    #[test]
    fn test_contains_half_open() {
        let bb = BoundingBox::new(0, 0, 2, 2);
        assert!(bb.contains(&Point::new(0, 0)));
        assert!(bb.contains(&Point::new(1, 1)));
        assert!(!bb.contains(&Point::new(2, 2)));
        assert!(!bb.contains(&Point::new(2, 0)));
        assert!(!bb.contains(&Point::new(-1, 0)));
    }

    #[test]
    fn test_intersection_single() {
        let a = BoundingBox::new(0, 0, 4, 4);
        let b = BoundingBox::new(2, 2, 4, 4);
        let shared = BoundingBox::intersection(&a, &b);
        assert_eq!(shared, BoundingBox::new(2, 2, 2, 2));
        let far = BoundingBox::new(10, 10, 1, 1);
        assert_eq!(BoundingBox::intersection(&a, &far).area(), Rational::from(0));
    }

    #[test]
    fn test_union_overlapping() {
        let a = BoundingBox::new(0, 0, 4, 4);
        let b = BoundingBox::new(2, 2, 4, 4);
        let u = BoundingBox::union(&a, &b);
        assert_eq!(u.area(), Rational::from(28));
        assert!(u.contains(&Point::new(0, 0)));
        assert!(u.contains(&Point::new(5, 5)));
        assert!(!u.contains(&Point::new(5, 0)));
        // The pieces tile without overlap: piecewise areas sum exactly.
        let mut total = Rational::from(0);
        for r in u.rects() {
            total = &total + &r.area();
        }
        assert_eq!(total, Rational::from(28));
    }

    #[test]
    fn test_union_tiles_equal_single_box() {
        // Two side-by-side boxes cover the same pixels as one wide box.
        let left = BoundingBox::new(0, 0, 2, 2);
        let right = BoundingBox::new(2, 0, 2, 2);
        let tiled = BoundingBox::union(&left, &right);
        let wide = BoundingBox::new(0, 0, 4, 2);
        assert_eq!(tiled.area(), Rational::from(8));
        assert_eq!(tiled, wide);
        assert_eq!(wide, tiled);
    }

    #[test]
    fn test_complementary_tilings_cover_the_same_square() {
        // Two 100x200 halves tile the 200x200 square, and so do the two
        // 200x100 halves; both unions and their intersection all equal
        // the square.
        let square = BoundingBox::new(0, 0, 200, 200);
        let vertical = BoundingBox::union(
            &BoundingBox::new(0, 0, 100, 200),
            &BoundingBox::new(100, 0, 100, 200),
        );
        let horizontal = BoundingBox::union(
            &BoundingBox::new(0, 0, 200, 100),
            &BoundingBox::new(0, 100, 200, 100),
        );
        assert_eq!(vertical, square);
        assert_eq!(horizontal, square);
        assert_eq!(BoundingBox::intersection(&vertical, &horizontal), square);
    }

    #[test]
    fn test_union_absorbs_covered_box() {
        let big = BoundingBox::new(0, 0, 10, 10);
        let inner = BoundingBox::new(3, 3, 2, 2);
        let u = BoundingBox::union(&inner, &big);
        assert_eq!(u.area(), Rational::from(100));
        assert!(!u.is_composite());
    }

    #[test]
    fn test_composite_intersection() {
        // An L-shaped set against a box spanning both arms.
        let l = BoundingBox::union(
            &BoundingBox::new(0, 0, 2, 6),
            &BoundingBox::new(2, 0, 4, 2),
        );
        let probe = BoundingBox::new(1, 1, 4, 4);
        let shared = BoundingBox::intersection(&l, &probe);
        // A 1x4 column of the tall arm and a 3x1 run of the wide arm.
        assert_eq!(shared.area(), Rational::from(7));
        assert!(l.intersects(&probe));
        assert!(!l.intersects(&BoundingBox::new(4, 4, 2, 2)));
    }

    #[test]
    fn test_composed_accessors_fail() {
        let composite = BoundingBox::union(
            &BoundingBox::new(0, 0, 2, 2),
            &BoundingBox::new(5, 0, 2, 2),
        );
        assert!(composite.is_composite());
        assert!(matches!(composite.x(), Err(ExactError::Composed { .. })));
        assert!(matches!(
            composite.centroid(),
            Err(ExactError::Composed { .. })
        ));
        let mut single = BoundingBox::new(0, 0, 1, 1);
        assert!(matches!(
            single.extend_to_contain(&composite),
            Err(ExactError::Composed { .. })
        ));
    }

    #[test]
    fn test_extend_to_contain() {
        let mut bb = BoundingBox::new(0, 0, 2, 2);
        bb.extend_to_contain(&BoundingBox::new(5, 5, 2, 2)).unwrap();
        assert_eq!(bb, BoundingBox::new(0, 0, 7, 7));
    }

    #[test]
    fn test_centroid() {
        let c = BoundingBox::new(0, 0, 4, 4).centroid().unwrap();
        assert_eq!(c, Point::new(2, 2));
        let c = BoundingBox::new(0, 0, 3, 3).centroid().unwrap();
        assert_eq!(c.x, Rational::new(3, 2));
        assert_eq!(c.y, Rational::new(3, 2));
    }

    #[test]
    fn test_near_intersection_each_side() {
        let bb = BoundingBox::new(0, 0, 4, 4);
        assert_eq!(
            bb.near_intersection(&Point::new(2, 9)).unwrap(),
            Point::new(2, 4)
        );
        assert_eq!(
            bb.near_intersection(&Point::new(2, -9)).unwrap(),
            Point::new(2, 0)
        );
        assert_eq!(
            bb.near_intersection(&Point::new(-9, 2)).unwrap(),
            Point::new(0, 2)
        );
        assert_eq!(
            bb.near_intersection(&Point::new(9, 2)).unwrap(),
            Point::new(4, 2)
        );
        // A diagonal ray exits through a corner.
        assert_eq!(
            bb.near_intersection(&Point::new(9, 9)).unwrap(),
            Point::new(4, 4)
        );
    }

    #[test]
    fn test_to_region_and_polygon() {
        let bb = BoundingBox::new(0, 0, 3, 2);
        let poly = bb.to_polygon().unwrap();
        assert_eq!(poly.area(), Rational::from(6));
        let composite = BoundingBox::union(
            &BoundingBox::new(0, 0, 2, 2),
            &BoundingBox::new(5, 0, 2, 2),
        );
        assert!(composite.to_polygon().is_err());
        let region = composite.to_region().unwrap();
        assert_eq!(region.area(), Rational::from(8));
    }

    #[test]
    fn test_display_and_parse() {
        let bb = BoundingBox::new(1, 2, 3, 4);
        assert_eq!(bb.to_string(), "1 2 3 4");
        assert_eq!("1 2 3 4".parse::<BoundingBox>().unwrap(), bb);
        let composite = BoundingBox::union(
            &BoundingBox::new(0, 0, 2, 2),
            &BoundingBox::new(5, 0, 2, 2),
        );
        let back: BoundingBox = composite.to_string().parse().unwrap();
        assert_eq!(back, composite);
        assert!("1 2 3".parse::<BoundingBox>().is_err());
        assert!("1 2 3 4 5".parse::<BoundingBox>().is_err());
        assert!("a b c d".parse::<BoundingBox>().is_err());
        assert!("[(1 2 3 4".parse::<BoundingBox>().is_err());
    }

    #[test]
    fn test_parse_composite_simplifies() {
        // Zero-area pieces vanish; a one-piece list collapses to single.
        let bb: BoundingBox = "[(0 0 2 2)(5 5 0 3)]".parse().unwrap();
        assert!(!bb.is_composite());
        assert_eq!(bb.to_string(), "0 0 2 2");
    }

    #[test]
    fn test_shift() {
        let bb = BoundingBox::new(1, 1, 2, 2).shift(3, -1).unwrap();
        assert_eq!(bb, BoundingBox::new(4, 0, 2, 2));
    }
}
