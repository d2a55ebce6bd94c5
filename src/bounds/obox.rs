//! Rotated rectangles snapped to the integer grid.

use std::fmt;
use std::str::FromStr;

use crate::error::ExactError;
use crate::polygon::ConvexPolygon;
use crate::primitives::Point;
use crate::rational::Rational;

/// A rectangle rotated counterclockwise about its origin corner.
///
/// The rotation is in whole degrees, stored normalized to `[0, 360)`.
/// The rotated corners are snapped to the nearest grid point, so the
/// derived polygon is exact once built; only the snap itself rounds.
/// The centroid is kept exact as the origin plus half the diagonal to
/// the snapped far corner.
#[derive(Debug, Clone)]
pub struct OrientedBox {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    rotation: i64,
    poly: ConvexPolygon,
    centroid: Point,
}

impl OrientedBox {
    /// Creates a rotated box from its origin corner, dimensions, and
    /// rotation in degrees.
    ///
    /// Negative dimensions are folded away: the origin moves to the
    /// opposite corner along the rotated axes and the dimensions become
    /// positive, so the box covers the same cells.
    pub fn new(
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        rotation: i64,
    ) -> Result<OrientedBox, ExactError> {
        let (x, y, width, height, rotation) = clean_parameters(x, y, width, height, rotation);
        let (poly, centroid) = build_polygon(x, y, width, height, rotation)?;
        Ok(OrientedBox {
            x,
            y,
            width,
            height,
            rotation,
            poly,
            centroid,
        })
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
    pub fn width(&self) -> i64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.height
    }

    /// The rotation in degrees, in `[0, 360)`.
    #[inline]
    pub fn rotation(&self) -> i64 {
        self.rotation
    }

    /// The corner ring after rotation and grid snapping.
    pub fn polygon(&self) -> &ConvexPolygon {
        &self.poly
    }

    /// The exact center of the snapped box.
    pub fn centroid(&self) -> Point {
        self.centroid.clone()
    }

    /// The exact area of the snapped corner ring.
    pub fn area(&self) -> Rational {
        self.poly.area()
    }

    /// True iff the point lies inside or on the snapped ring.
    pub fn contains(&self, point: &Point) -> bool {
        self.poly.contains(point)
    }

    /// A copy of the box shifted by the given offsets.
    pub fn shift(&self, dx: i64, dy: i64) -> Result<OrientedBox, ExactError> {
        OrientedBox::new(self.x + dx, self.y + dy, self.width, self.height, self.rotation)
    }
}

fn clean_parameters(
    mut x: i64,
    mut y: i64,
    mut width: i64,
    mut height: i64,
    mut rotation: i64,
) -> (i64, i64, i64, i64, i64) {
    rotation %= 360;
    if width < 0 || height < 0 {
        let mut tx = 0.0;
        let mut ty = 0.0;
        if height < 0 {
            ty = height as f64;
            height = -height;
        }
        if width < 0 {
            tx = width as f64;
            width = -width;
        }
        // Carry the origin to the opposite corner along the rotated axes.
        let theta = (-rotation as f64).to_radians();
        let (sin, cos) = theta.sin_cos();
        x += (tx * cos - ty * sin) as i64;
        y += (tx * sin + ty * cos) as i64;
    }
    if rotation < 0 {
        rotation += 360;
    }
    (x, y, width, height, rotation)
}

fn build_polygon(
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    rotation: i64,
) -> Result<(ConvexPolygon, Point), ExactError> {
    let theta = (rotation as f64).to_radians();
    let (sin, cos) = theta.sin_cos();
    let w = width as f64;
    let h = height as f64;
    let corners = [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)];
    let mut poly = ConvexPolygon::new();
    let mut centroid = Point::new(x, y);
    for (i, (cx, cy)) in corners.iter().enumerate() {
        let px = (x as f64 + cx * cos - cy * sin).round() as i64;
        let py = (y as f64 + cx * sin + cy * cos).round() as i64;
        let corner = Point::new(px, py);
        if i == 2 {
            // The far corner: the center is halfway along the diagonal,
            // computed exactly from the snapped coordinates.
            let two = Rational::from(2);
            let origin_x = Rational::from(x);
            let origin_y = Rational::from(y);
            centroid = Point::from_rationals(
                &origin_x + &(&(&corner.x - &origin_x) / &two),
                &origin_y + &(&(&corner.y - &origin_y) / &two),
                Rational::from(1),
            );
        }
        poly.add_vertex(corner)?;
    }
    Ok((poly, centroid))
}

impl PartialEq for OrientedBox {
    /// Boxes are equal when their snapped corner rings cover the same
    /// region, regardless of which corner is the origin.
    fn eq(&self, other: &Self) -> bool {
        self.poly == other.poly
    }
}

impl fmt::Display for OrientedBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.x, self.y, self.width, self.height, self.rotation
        )
    }
}

impl FromStr for OrientedBox {
    type Err = ExactError;

    /// Parses five whitespace-separated integers:
    /// `x y width height rotation`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ExactError::Parse {
            text: s.to_string(),
        };
        let mut nums = s.split_whitespace().map(|t| t.parse::<i64>());
        let mut next = || nums.next().ok_or_else(bad)?.map_err(|_| bad());
        let (x, y, w, h, r) = (next()?, next()?, next()?, next()?, next()?);
        if nums.next().is_some() {
            return Err(bad());
        }
        OrientedBox::new(x, y, w, h, r)
    }
}
