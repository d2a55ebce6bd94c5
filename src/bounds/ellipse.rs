//! Rotated ellipses, carried for layout but without overlap math.

use std::fmt;
use std::str::FromStr;

use crate::bounds::{BoundingBox, OrientedBox};
use crate::error::ExactError;
use crate::primitives::Point;

/// An axis-parameterized ellipse inscribed in a rotated rectangle.
///
/// The ellipse fills the oriented box with the same parameters. Only
/// the positional queries are supported; containment and overlap area
/// report [`ExactError::NotImplemented`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    rotation: i64,
}

impl Ellipse {
    /// Creates an ellipse from its bounding rectangle's origin corner,
    /// dimensions, and rotation in degrees.
    #[inline]
    pub fn new(x: i64, y: i64, width: i64, height: i64, rotation: i64) -> Self {
        Ellipse {
            x,
            y,
            width,
            height,
            rotation,
        }
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

    #[inline]
    pub fn rotation(&self) -> i64 {
        self.rotation
    }

    /// The axis-aligned box of the unrotated parameter rectangle.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }

    /// The center of the ellipse, via the oriented box it fills.
    pub fn centroid(&self) -> Result<Point, ExactError> {
        let obox = OrientedBox::new(self.x, self.y, self.width, self.height, self.rotation)?;
        Ok(obox.centroid())
    }

    pub fn contains(&self, _point: &Point) -> Result<bool, ExactError> {
        Err(ExactError::NotImplemented {
            what: "ellipse containment",
        })
    }

    pub fn area(&self) -> Result<f64, ExactError> {
        Err(ExactError::NotImplemented {
            what: "ellipse area",
        })
    }

    pub fn intersect_area(&self, _other: &Ellipse) -> Result<f64, ExactError> {
        Err(ExactError::NotImplemented {
            what: "ellipse overlap area",
        })
    }

    /// A copy of the ellipse shifted by the given offsets.
    pub fn shift(&self, dx: i64, dy: i64) -> Ellipse {
        Ellipse::new(self.x + dx, self.y + dy, self.width, self.height, self.rotation)
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.x, self.y, self.width, self.height, self.rotation
        )
    }
}

impl FromStr for Ellipse {
    type Err = ExactError;

    /// Parses five whitespace-separated integers:
    /// `x y width height rotation`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ExactError::Parse {
            text: s.to_string(),
        };
        let mut nums = s.split_whitespace().map(|t| t.parse::<i64>());
        let mut next = || nums.next().ok_or_else(bad)?.map_err(|_| bad());
        let e = Ellipse::new(next()?, next()?, next()?, next()?, next()?);
        if nums.next().is_some() {
            return Err(bad());
        }
        Ok(e)
    }
}
