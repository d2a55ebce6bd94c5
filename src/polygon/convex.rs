//! Convex polygons with exact boolean operations.

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use crate::error::ExactError;
use crate::polygon::region::Region;
use crate::predicates::{
    area_sign, collinear_overlap_endpoints, line_intersection, SegmentClass,
};
use crate::primitives::{Extent, Point};
use crate::rational::Rational;

/// Which polygon's boundary is currently inside the other during the
/// advancing-edge intersection walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InFlag {
    Unknown,
    PIn,
    QIn,
}

/// A convex polygon: vertices in counterclockwise order with every
/// interior angle below 180 degrees.
///
/// Degenerate rings with one vertex (a point) or two (a segment) are
/// allowed; they have zero area and arise naturally as intersection
/// results. The axis-aligned extent is cached and recomputed lazily
/// after mutation.
#[derive(Debug, Clone)]
pub struct ConvexPolygon {
    vertices: Vec<Point>,
    extent: RefCell<Option<Extent>>,
}

impl ConvexPolygon {
    /// Creates an empty polygon.
    pub fn new() -> Self {
        ConvexPolygon {
            vertices: Vec::new(),
            extent: RefCell::new(None),
        }
    }

    /// Builds a polygon from integer coordinate pairs in counterclockwise
    /// order. Collinear points are silently dropped; reflex points fail.
    pub fn from_points(points: &[(i64, i64)]) -> Result<Self, ExactError> {
        let mut poly = ConvexPolygon::new();
        for &(x, y) in points {
            poly.add_vertex(Point::new(x, y))?;
        }
        Ok(poly)
    }

    /// Builds a polygon from an ordered vertex list.
    pub fn from_vertices(points: Vec<Point>) -> Result<Self, ExactError> {
        let mut poly = ConvexPolygon::new();
        for p in points {
            poly.add_vertex(p)?;
        }
        Ok(poly)
    }

    /// Appends a vertex to the counterclockwise ring.
    ///
    /// Returns `Ok(false)` when the point is redundant (a repeat or a
    /// collinear interior point). A point collinear with the most recent
    /// edge extends that edge in place, replacing its endpoint. A point
    /// that would make the ring reflex or self-crossing is rejected.
    pub fn add_vertex(&mut self, point: Point) -> Result<bool, ExactError> {
        let length = self.vertices.len();
        if length > 2 {
            let a = self.vtx(length as i64 - 1);
            let b = self.vtx(length as i64 - 2);
            let on_closing_edge = area_sign(&point, &self.vtx(0), &a);
            if on_closing_edge.is_zero() {
                // Either between the endpoints and redundant, or off to
                // one side and non-convex.
                if area_sign(&point, &self.vtx(0), &self.vtx(1)).is_negative()
                    || area_sign(&point, &b, &a).is_negative()
                {
                    return Err(self.non_convex(&point));
                }
                return Ok(false);
            } else if on_closing_edge.is_negative() {
                return Err(self.non_convex(&point));
            }
            let on_last_edge = area_sign(&point, &b, &a);
            if on_last_edge.is_negative() {
                return Err(self.non_convex(&point));
            } else if on_last_edge.is_zero() {
                // The most recent edge is being extended.
                self.vertices.pop();
            }
        } else if length == 1 && point == self.vertices[0] {
            return Ok(false);
        } else if length == 2 {
            let on_edge = area_sign(&point, &self.vertices[0], &self.vertices[1]);
            if !on_edge.is_positive() {
                if on_edge.is_zero() {
                    return Ok(false);
                }
                return Err(self.non_convex(&point));
            }
        }
        self.vertices.push(point);
        *self.extent.borrow_mut() = None;
        Ok(true)
    }

    fn non_convex(&self, point: &Point) -> ExactError {
        ExactError::NonConvex {
            point: point.to_string(),
            polygon: self.to_string(),
        }
    }

    /// The vertices in counterclockwise order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices in the ring.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// True iff the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertex at the given index, wrapping around the ring in either
    /// direction. `None` when the polygon is empty.
    pub fn vertex(&self, index: i64) -> Option<Point> {
        if self.vertices.is_empty() {
            None
        } else {
            Some(self.vtx(index))
        }
    }

    // Wraparound indexing; callers guarantee a non-empty ring.
    fn vtx(&self, index: i64) -> Point {
        let len = self.vertices.len() as i64;
        let mut i = index;
        if i < 0 {
            i += len;
        }
        self.vertices[(i % len) as usize].clone()
    }

    /// The exact axis-aligned extent, or `None` for an empty polygon.
    pub fn extent(&self) -> Option<Extent> {
        if let Some(e) = self.extent.borrow().as_ref() {
            return Some(e.clone());
        }
        let e = Extent::of(&self.vertices)?;
        *self.extent.borrow_mut() = Some(e.clone());
        Some(e)
    }

    /// The center of the polygon's extent. The origin for an empty ring.
    pub fn centroid(&self) -> Point {
        match self.extent() {
            Some(e) => e.center(),
            None => Point::new(0, 0),
        }
    }

    /// The exact enclosed area, summed as signed trapezoids between each
    /// edge and the x axis. Zero for rings of fewer than three vertices.
    pub fn area(&self) -> Rational {
        let len = self.vertices.len();
        if len < 3 {
            return Rational::from(0);
        }
        let mut total = Rational::from(0);
        for i in 0..len {
            let curr = &self.vertices[i];
            let next = &self.vertices[(i + 1) % len];
            let width = &curr.x - &next.x;
            let height = &next.y + &curr.y;
            total = &total + &(&width * &height);
        }
        &total * &Rational::new(1, 2)
    }

    /// True iff the point lies inside or on the boundary.
    pub fn contains(&self, point: &Point) -> bool {
        match self.vertices.len() {
            0 => false,
            1 => self.vertices[0] == *point,
            len => (0..len as i64)
                .all(|i| !area_sign(&self.vtx(i - 1), &self.vtx(i), point).is_negative()),
        }
    }

    /// True iff every vertex of this polygon lies within `other`.
    pub fn is_inside(&self, other: &ConvexPolygon) -> bool {
        !self.vertices.is_empty() && self.vertices.iter().all(|v| other.contains(v))
    }

    /// The boundary point where the ray from the centroid through
    /// `toward` exits the polygon.
    ///
    /// Walks the counterclockwise ring looking for the sign change of the
    /// vertex/centroid/target orientation; the exit edge is the first
    /// edge whose far vertex swings back to the positive side.
    pub fn near_intersection(&self, toward: &Point) -> Result<Point, ExactError> {
        if self.vertices.is_empty() {
            return Err(ExactError::DegenerateRegion {
                detail: format!("no near intersection of an empty polygon with {toward}"),
            });
        }
        let center = self.centroid();
        let missed = || ExactError::DegenerateRegion {
            detail: format!("no near intersection with {toward}"),
        };
        let mut prev = self.vtx(0);
        let mut is_negative = false;
        for v in &self.vertices {
            let curr = v.clone();
            let sign = area_sign(&curr, &center, toward);
            if is_negative && sign.is_positive() {
                let (_, p) = line_intersection(&center, toward, &prev, &curr);
                return p.ok_or_else(missed);
            } else if sign.is_negative() {
                is_negative = true;
            } else if is_negative && sign.is_zero() {
                return Ok(curr);
            }
            prev = curr;
        }
        if !is_negative {
            Err(missed())
        } else {
            let curr = self.vtx(0);
            let (_, p) = line_intersection(&center, toward, &prev, &curr);
            p.ok_or_else(missed)
        }
    }

    /// Cuts the polygon along the infinite line through `a` and `b`.
    ///
    /// Returns `[left, right]` halves when the line crosses the interior,
    /// or a single copy of the polygon when it does not. Vertices on the
    /// line join both halves, placed where they keep each half convex;
    /// edges crossed by the line gain a synthetic vertex at the exact
    /// crossing, shared by both halves.
    pub fn clip(&self, a: &Point, b: &Point) -> Result<Vec<ConvexPolygon>, ExactError> {
        let mut left: Vec<Point> = Vec::new();
        let mut right: Vec<Point> = Vec::new();
        let mut left2: Vec<Point> = Vec::new();
        let mut right2: Vec<Point> = Vec::new();
        let mut collinear1: Option<Point> = None;
        let mut collinear2: Option<Point> = None;
        let mut already_right = false;
        let mut already_left = false;
        let mut already_collinear = false;

        // Split the ring into the run of vertices before the cut and the
        // run after it, per side, so each half comes out in ring order.
        for curr in &self.vertices {
            let side = area_sign(curr, a, b);

            if side.is_negative() {
                if already_right {
                    right.push(curr.clone());
                } else {
                    right2.push(curr.clone());
                }
            } else if !right2.is_empty() {
                already_right = true;
            }

            if side.is_positive() {
                if already_left {
                    left.push(curr.clone());
                } else {
                    left2.push(curr.clone());
                }
            } else if !left2.is_empty() {
                already_left = true;
            }

            if side.is_zero() {
                if already_collinear {
                    collinear2 = Some(curr.clone());
                } else {
                    collinear1 = Some(curr.clone());
                }
            } else if collinear1.is_some() {
                already_collinear = true;
            }
        }

        left.extend(left2);
        right.extend(right2);

        if left.is_empty() || right.is_empty() {
            return Ok(vec![self.clone()]);
        }

        // Vertices on the line sit between the two runs; attach each at
        // whichever end keeps the halves convex.
        if let Some(c1) = collinear1 {
            let last_right = right[right.len() - 1].clone();
            if area_sign(&c1, &left[0], &last_right).is_negative() {
                left.push(c1.clone());
                right.insert(0, c1);
                if let Some(c2) = collinear2 {
                    left.insert(0, c2.clone());
                    right.push(c2);
                }
            } else {
                left.insert(0, c1.clone());
                right.push(c1);
                if let Some(c2) = collinear2 {
                    left.push(c2.clone());
                    right.insert(0, c2);
                }
            }
        }

        let parallel_cut = || ExactError::DegenerateRegion {
            detail: format!("cut line through {a} and {b} misses a crossed edge"),
        };

        let left_start = left[0].clone();
        let left_end = left[left.len() - 1].clone();
        let right_start = right[0].clone();
        let right_end = right[right.len() - 1].clone();

        if left_start != right_end {
            // The seam does not land on a vertex; split the crossed edge.
            let (_, p) = line_intersection(a, b, &left_start, &right_end);
            let neo = p.ok_or_else(parallel_cut)?;
            left.insert(0, neo.clone());
            right.push(neo);
        }
        if right_start != left_end {
            let (_, p) = line_intersection(a, b, &right_start, &left_end);
            let neo = p.ok_or_else(parallel_cut)?;
            left.push(neo.clone());
            right.insert(0, neo);
        }

        Ok(vec![
            ConvexPolygon::from_vertices(left)?,
            ConvexPolygon::from_vertices(right)?,
        ])
    }

    /// The convex polygon covering exactly the area shared by `self` and
    /// `other`.
    ///
    /// Advances around both boundaries simultaneously, emitting each
    /// crossing and the vertices of whichever boundary is currently
    /// inside the other. When the boundaries never cross, falls back to
    /// the containment test; anti-parallel collinear edges collapse the
    /// result to the shared degenerate segment.
    pub fn intersection(&self, other: &ConvexPolygon) -> Result<ConvexPolygon, ExactError> {
        let (se, oe) = match (self.extent(), other.extent()) {
            (Some(se), Some(oe)) => (se, oe),
            _ => return Ok(ConvexPolygon::new()),
        };
        if !se.intersects(&oe) {
            return Ok(ConvexPolygon::new());
        }

        let n = self.vertices.len() as i64;
        let m = other.vertices.len() as i64;
        let origin = Point::new(0, 0);
        let mut solution = ConvexPolygon::new();
        let (mut a, mut b) = (0i64, 0i64);
        let (mut aa, mut ba) = (0i64, 0i64);
        let mut inflag = InFlag::Unknown;
        let mut first_point = true;

        loop {
            let pa1 = self.vtx(a - 1);
            let pa = self.vtx(a);
            let qb1 = other.vtx(b - 1);
            let qb = other.vtx(b);
            let edge_a = pa1.minus(&pa)?;
            let edge_b = qb1.minus(&qb)?;
            let cross = area_sign(&origin, &edge_a, &edge_b);
            let a_half_b = area_sign(&qb1, &qb, &pa);
            let b_half_a = area_sign(&pa1, &pa, &qb);

            let (code, crossing) = line_intersection(&pa1, &pa, &qb1, &qb);
            if code == SegmentClass::Proper || code == SegmentClass::Vertex {
                if inflag == InFlag::Unknown && first_point {
                    aa = 0;
                    ba = 0;
                    first_point = false;
                }
                if let Some(p) = crossing {
                    solution.add_vertex(p)?;
                }
                inflag = in_out(inflag, &a_half_b, &b_half_a);
            }

            if code == SegmentClass::CollinearOverlap && edge_a.dot(&edge_b).is_negative() {
                // Anti-parallel overlapping edges: the whole intersection
                // is the shared segment.
                let (lo, hi) = collinear_overlap_endpoints(&pa1, &pa, &qb1, &qb).ok_or_else(
                    || ExactError::DegenerateRegion {
                        detail: format!("overlapping edges of {self} and {other} share no span"),
                    },
                )?;
                let mut seg = ConvexPolygon::new();
                seg.add_vertex(lo)?;
                seg.add_vertex(hi)?;
                return Ok(seg);
            } else if cross.is_zero() && a_half_b.is_negative() && b_half_a.is_negative() {
                // Parallel and separated: no overlap at all.
                return Ok(solution);
            } else if cross.is_zero() && a_half_b.is_zero() && b_half_a.is_zero() {
                // Collinear edges: advance without emitting.
                if inflag == InFlag::PIn {
                    ba += 1;
                    b += 1;
                } else {
                    aa += 1;
                    a += 1;
                }
            } else if (!cross.is_negative() && b_half_a.is_positive())
                || (cross.is_negative() && !a_half_b.is_positive())
            {
                if inflag == InFlag::PIn {
                    solution.add_vertex(pa.clone())?;
                }
                aa += 1;
                a += 1;
            } else if (!cross.is_negative() && !b_half_a.is_positive())
                || (cross.is_negative() && a_half_b.is_positive())
            {
                if inflag == InFlag::QIn {
                    solution.add_vertex(qb.clone())?;
                }
                ba += 1;
                b += 1;
            }

            // Stop once both boundaries have cycled, or one has twice.
            if !((aa < n || ba < m) && aa < 2 * n && ba < 2 * m) {
                break;
            }
        }

        if inflag == InFlag::Unknown {
            // The boundaries never crossed: either one polygon swallows
            // the other, or they are disjoint.
            return Ok(if self.contains(&other.vtx(0)) {
                other.clone()
            } else if other.contains(&self.vtx(0)) {
                self.clone()
            } else {
                ConvexPolygon::new()
            });
        }
        Ok(solution)
    }

    /// The region covered by `self` but not by `other`.
    ///
    /// Peels one convex piece off `self` per edge of the overlap: each
    /// overlap edge cuts the remaining cover, the half away from the
    /// overlap joins the difference, and the half containing the overlap
    /// is carved by the next edge.
    pub fn subtract(&self, other: &ConvexPolygon) -> Result<Region, ExactError> {
        let overlap = self.intersection(other)?;
        if !overlap.area().is_positive() {
            return Ok(Region::from(self.clone()));
        }
        let mut copy = self.clone();
        let mut diff = Region::new();
        let mut curr = overlap.vtx(overlap.vertex_count() as i64 - 1);
        for next in overlap.vertices() {
            let prev = curr;
            curr = next.clone();
            // The overlap ring runs counterclockwise, so the region left
            // of prev->curr holds the hole and the right side is kept.
            let mut halves = copy.clip(&prev, &curr)?.into_iter();
            if let (Some(hole_side), Some(kept)) = (halves.next(), halves.next()) {
                copy = hole_side;
                diff.add_piece(kept)?;
            }
        }
        Ok(diff)
    }

    /// A non-overlapping convex cover of the union of two polygons:
    /// both when disjoint, the larger when one absorbs the other, and
    /// the general region union otherwise.
    pub fn merge(p: &ConvexPolygon, q: &ConvexPolygon) -> Result<Vec<ConvexPolygon>, ExactError> {
        let split_area = p.intersection(q)?.area();
        if split_area.is_zero() {
            Ok(vec![p.clone(), q.clone()])
        } else if split_area == p.area() || split_area == q.area() {
            Ok(vec![if p.area() < q.area() {
                q.clone()
            } else {
                p.clone()
            }])
        } else {
            let union = Region::union(&Region::from(p.clone()), &Region::from(q.clone()))?;
            Ok(union.into_pieces())
        }
    }
}

impl Default for ConvexPolygon {
    fn default() -> Self {
        ConvexPolygon::new()
    }
}

fn in_out(inflag: InFlag, a_half_b: &Rational, b_half_a: &Rational) -> InFlag {
    if a_half_b.is_positive() {
        InFlag::PIn
    } else if b_half_a.is_positive() {
        InFlag::QIn
    } else {
        inflag
    }
}

impl PartialEq for ConvexPolygon {
    /// Same vertex cycle, allowing a rotated starting offset.
    fn eq(&self, other: &Self) -> bool {
        let len = self.vertices.len();
        if len != other.vertices.len() {
            return false;
        }
        if len == 0 {
            return true;
        }
        if self.extent() != other.extent() {
            return false;
        }
        let offset = match (0..len).find(|&i| self.vertices[i] == other.vertices[0]) {
            Some(i) => i,
            None => return false,
        };
        (0..len).all(|k| self.vertices[(offset + k) % len] == other.vertices[k])
    }
}

impl fmt::Display for ConvexPolygon {
    /// Renders the vertex ring as `(x y)(x y)...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.vertices {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl FromStr for ConvexPolygon {
    type Err = ExactError;

    /// Parses a `(x y)(x y)...` vertex list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ExactError::Parse {
            text: s.to_string(),
        };
        let mut poly = ConvexPolygon::new();
        let mut rest = s.trim();
        while !rest.is_empty() {
            if !rest.starts_with('(') {
                return Err(bad());
            }
            let close = rest.find(')').ok_or_else(bad)?;
            let point: Point = rest[1..close].parse().map_err(|_| bad())?;
            poly.add_vertex(point)?;
            rest = rest[close + 1..].trim_start();
        }
        Ok(poly)
    }
}
