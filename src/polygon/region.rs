//! Composite regions built from non-overlapping convex pieces.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ExactError;
use crate::polygon::convex::ConvexPolygon;
use crate::primitives::{Extent, Point};
use crate::rational::Rational;

/// An arbitrary region of the plane, stored as a set of pairwise
/// non-overlapping convex pieces.
///
/// The original polygons added to the region are retained separately:
/// they may overlap, but offer faster bounds checks and are the unit the
/// fragmentation count is measured in. Area and extent are cached and
/// recomputed lazily after mutation.
#[derive(Debug, Clone)]
pub struct Region {
    pieces: Vec<ConvexPolygon>,
    originals: Vec<ConvexPolygon>,
    area: RefCell<Option<Rational>>,
    extent: RefCell<Option<Extent>>,
}

impl Region {
    /// Creates an empty region.
    pub fn new() -> Self {
        Region {
            pieces: Vec::new(),
            originals: Vec::new(),
            area: RefCell::new(None),
            extent: RefCell::new(None),
        }
    }

    /// The non-overlapping convex pieces tiling the region.
    pub fn pieces(&self) -> &[ConvexPolygon] {
        &self.pieces
    }

    /// The polygons originally added, which may overlap. Falls back to
    /// the piece list when no originals were recorded.
    pub fn originals(&self) -> &[ConvexPolygon] {
        if self.originals.is_empty() {
            &self.pieces
        } else {
            &self.originals
        }
    }

    /// Consumes the region, yielding its non-overlapping pieces.
    pub fn into_pieces(self) -> Vec<ConvexPolygon> {
        self.pieces
    }

    /// True iff the region covers nothing.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The exact covered area: the sum of the piece areas.
    pub fn area(&self) -> Rational {
        if let Some(a) = self.area.borrow().as_ref() {
            return a.clone();
        }
        let mut total = Rational::from(0);
        for piece in &self.pieces {
            total = &total + &piece.area();
        }
        *self.area.borrow_mut() = Some(total.clone());
        total
    }

    /// The extent enclosing every original polygon.
    pub fn extent(&self) -> Option<Extent> {
        if let Some(e) = self.extent.borrow().as_ref() {
            return Some(e.clone());
        }
        let mut extents = self.originals().iter().filter_map(|p| p.extent());
        let mut total = extents.next()?;
        for e in extents {
            total = total.union(&e);
        }
        *self.extent.borrow_mut() = Some(total.clone());
        Some(total)
    }

    fn invalidate(&mut self) {
        *self.area.borrow_mut() = None;
        *self.extent.borrow_mut() = None;
    }

    /// True iff any original polygon contains the point.
    pub fn contains(&self, point: &Point) -> bool {
        self.originals().iter().any(|p| p.contains(point))
    }

    /// Unions one convex polygon into the piece set, keeping the pieces
    /// non-overlapping.
    ///
    /// Disjoint polygons append whole; a polygon already covered changes
    /// nothing; a partial overlap is subtracted against the cover and the
    /// remainder pieces recurse back in. A subtraction that gains area
    /// means the cover invariant was already broken, and fails.
    pub fn add_piece(&mut self, poly: ConvexPolygon) -> Result<(), ExactError> {
        if self.pieces.is_empty() {
            self.pieces.push(poly);
            self.invalidate();
            return Ok(());
        }
        let remainder = subtract_overlap(&poly, &self.pieces)?;
        match remainder.area().try_cmp(&poly.area())? {
            Ordering::Less => {
                for piece in remainder.into_pieces() {
                    self.add_piece(piece)?;
                }
                self.invalidate();
            }
            Ordering::Equal => {
                self.pieces.push(poly);
                self.invalidate();
            }
            Ordering::Greater => {
                return Err(ExactError::DegenerateRegion {
                    detail: format!("subtracting the cover from {poly} gained area"),
                });
            }
        }
        Ok(())
    }

    /// The union of two regions.
    pub fn union(a: &Region, b: &Region) -> Result<Region, ExactError> {
        if a.pieces.is_empty() {
            return Ok(b.clone());
        }
        if b.pieces.is_empty() {
            return Ok(a.clone());
        }
        let mut result = Region {
            pieces: a.pieces.clone(),
            originals: a.originals().to_vec(),
            area: RefCell::new(None),
            extent: RefCell::new(None),
        };
        for piece in &b.pieces {
            result.add_piece(piece.clone())?;
        }
        result.originals.extend(b.originals().iter().cloned());
        result.invalidate();
        Ok(result)
    }

    /// The intersection of two regions: every positive-area overlap
    /// between a piece of `a` and a piece of `b`, unified.
    pub fn intersection(a: &Region, b: &Region) -> Result<Region, ExactError> {
        let mut result = Region::new();
        for pa in &a.pieces {
            for pb in &b.pieces {
                let close = match (pa.extent(), pb.extent()) {
                    (Some(x), Some(y)) => x.intersects(&y),
                    _ => false,
                };
                if close {
                    let shared = pa.intersection(pb)?;
                    if shared.area().is_positive() {
                        result.add_piece(shared.clone())?;
                        result.originals.push(shared);
                    }
                }
            }
        }
        Ok(result)
    }

    /// True iff the regions share positive area.
    pub fn intersects(&self, other: &Region) -> Result<bool, ExactError> {
        match (self.extent(), other.extent()) {
            (Some(a), Some(b)) if a.intersects(&b) => {
                Ok(Region::intersection(self, other)?.area().is_positive())
            }
            _ => Ok(false),
        }
    }

    /// How many of this region's original polygons the other region
    /// touches.
    pub fn fragmentation_count(&self, other: &Region) -> Result<usize, ExactError> {
        let mut count = 0;
        for original in self.originals() {
            if Region::from(original.clone()).intersects(other)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// True iff the two regions cover exactly the same area, regardless
    /// of how each is decomposed into pieces.
    pub fn same_region(&self, other: &Region) -> Result<bool, ExactError> {
        let area = self.area();
        if area != other.area() {
            return Ok(false);
        }
        Ok(Region::intersection(self, other)?.area() == area)
    }
}

fn subtract_overlap(poly: &ConvexPolygon, cover: &[ConvexPolygon]) -> Result<Region, ExactError> {
    for piece in cover {
        if piece.intersection(poly)?.area().is_positive() {
            return poly.subtract(piece);
        }
    }
    Ok(Region::from(poly.clone()))
}

impl Default for Region {
    fn default() -> Self {
        Region::new()
    }
}

impl From<ConvexPolygon> for Region {
    fn from(poly: ConvexPolygon) -> Self {
        let mut region = Region::new();
        region.pieces.push(poly);
        region
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.same_region(other).unwrap_or(false)
    }
}

impl fmt::Display for Region {
    /// Renders as `[(piece)(piece)...]` with each piece a point list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for piece in &self.pieces {
            write!(f, "({piece})")?;
        }
        write!(f, "]")
    }
}

impl FromStr for Region {
    type Err = ExactError;

    /// Parses the bracketed piece-list form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ExactError::Parse {
            text: s.to_string(),
        };
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .ok_or_else(bad)?;
        let mut result = Region::new();
        let mut depth = 0usize;
        let mut start = 0usize;
        for (i, ch) in inner.char_indices() {
            match ch {
                '(' => {
                    if depth == 0 {
                        start = i + 1;
                    }
                    depth += 1;
                }
                ')' => {
                    if depth == 0 {
                        return Err(bad());
                    }
                    depth -= 1;
                    if depth == 0 {
                        let piece: ConvexPolygon = inner[start..i].parse()?;
                        result.add_piece(piece)?;
                    }
                }
                c if c.is_whitespace() => {}
                _ if depth == 0 => return Err(bad()),
                _ => {}
            }
        }
        if depth != 0 {
            return Err(bad());
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: i64, y: i64, side: i64) -> ConvexPolygon {
        ConvexPolygon::from_points(&[(x, y), (x + side, y), (x + side, y + side), (x, y + side)])
            .unwrap()
    }

    #[test]
    fn test_union_disjoint() {
        let a = Region::from(square(0, 0, 1));
        let b = Region::from(square(5, 5, 1));
        let u = Region::union(&a, &b).unwrap();
        assert_eq!(u.pieces().len(), 2);
        assert_eq!(u.area(), Rational::from(2));
    }

    #[test]
    fn test_union_overlapping() {
        let a = Region::from(square(0, 0, 2));
        let b = Region::from(square(1, 1, 2));
        let u = Region::union(&a, &b).unwrap();
        // 4 + 4 - 1 of shared corner.
        assert_eq!(u.area(), Rational::from(7));
        assert!(u.contains(&Point::new(0, 0)));
        assert!(u.contains(&Point::new(3, 3)));
        assert!(!u.contains(&Point::new(3, 0)));
    }

    #[test]
    fn test_union_absorbs_covered_piece() {
        let big = Region::from(square(0, 0, 10));
        let inner = Region::from(square(2, 2, 3));
        let u = Region::union(&big, &inner).unwrap();
        assert_eq!(u.area(), Rational::from(100));
    }

    #[test]
    fn test_inclusion_exclusion() {
        let a = Region::from(
            ConvexPolygon::from_points(&[(0, 0), (200, 0), (100, 100)]).unwrap(),
        );
        let b = Region::from(
            ConvexPolygon::from_points(&[(0, 100), (100, 0), (200, 100)]).unwrap(),
        );
        let union = Region::union(&a, &b).unwrap();
        let shared = Region::intersection(&a, &b).unwrap();
        assert_eq!(
            &union.area() + &shared.area(),
            &a.area() + &b.area()
        );
        assert_eq!(shared.area(), Rational::from(5000));
    }

    #[test]
    fn test_intersection_bounds() {
        let a = Region::from(square(0, 0, 4));
        let b = Region::from(square(2, 2, 4));
        let shared = Region::intersection(&a, &b).unwrap();
        assert!(shared.area() <= a.area());
        assert!(shared.area() <= b.area());
        assert_eq!(shared.area(), Rational::from(4));
    }

    #[test]
    fn test_intersects() {
        let a = Region::from(square(0, 0, 2));
        let b = Region::from(square(1, 1, 2));
        let c = Region::from(square(10, 10, 2));
        assert!(a.intersects(&b).unwrap());
        assert!(!a.intersects(&c).unwrap());
        // Edge-adjacent squares share no area.
        let d = Region::from(square(2, 0, 2));
        assert!(!a.intersects(&d).unwrap());
    }

    #[test]
    fn test_fragmentation_count() {
        let two = Region::union(
            &Region::from(square(0, 0, 2)),
            &Region::from(square(10, 0, 2)),
        )
        .unwrap();
        // A band across both originals.
        let band = Region::from(
            ConvexPolygon::from_points(&[(-1, 0), (13, 0), (13, 1), (-1, 1)]).unwrap(),
        );
        assert_eq!(two.fragmentation_count(&band).unwrap(), 2);
        let corner = Region::from(square(1, 1, 2));
        assert_eq!(two.fragmentation_count(&corner).unwrap(), 1);
        let far = Region::from(square(100, 100, 2));
        assert_eq!(two.fragmentation_count(&far).unwrap(), 0);
    }

    #[test]
    fn test_equality_across_decompositions() {
        // The same L-shape built in two different orders.
        let l1 = Region::union(
            &Region::from(square(0, 0, 2)),
            &Region::from(square(0, 2, 1)),
        )
        .unwrap();
        let l2 = Region::union(
            &Region::from(square(0, 2, 1)),
            &Region::from(square(0, 0, 2)),
        )
        .unwrap();
        assert_eq!(l1, l2);
        assert_ne!(l1, Region::from(square(0, 0, 2)));
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let u = Region::union(
            &Region::from(square(0, 0, 1)),
            &Region::from(square(3, 0, 1)),
        )
        .unwrap();
        let text = u.to_string();
        assert_eq!(text, "[((0 0)(1 0)(1 1)(0 1))((3 0)(4 0)(4 1)(3 1))]");
        let back: Region = text.parse().unwrap();
        assert_eq!(back, u);
        assert!("((0 0))".parse::<Region>().is_err());
        assert!("[((0 0)]".parse::<Region>().is_err());
        assert_eq!("[]".parse::<Region>().unwrap(), Region::new());
    }
}
