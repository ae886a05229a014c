//! Validated numeric primitives and the box record curves connect.
//!
//! Raw `f64` enters the crate through `try_*` constructors; past that point
//! lengths are `Px`, positions along a side are `Fraction`, and boxes have been
//! checked for NaN and infinities.

use std::fmt;

use glam::{DVec2, dvec2};
use thiserror::Error;

use crate::errors::CurveError;

/// Error type for invalid numeric values
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    #[error("value is NaN")]
    NaN,
    #[error("value is infinite")]
    Infinite,
    #[error("value is negative")]
    Negative,
    #[error("value {0} is outside [0, 1]")]
    OutOfRange(f64),
}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Length in screen pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(f64);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Create a Px (const-friendly, unchecked).
    /// Use `try_non_negative` for user-provided values.
    #[inline]
    pub(crate) const fn px(val: f64) -> Px {
        Px(val)
    }

    /// Create a non-negative Px with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Px, NumericError> {
        let val = check_finite(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Px(val))
        }
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Position along a box side, 0.0 at one corner and 1.0 at the other
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Fraction(f64);

impl Fraction {
    #[inline]
    pub(crate) const fn of(val: f64) -> Fraction {
        Fraction(val)
    }

    /// Create a Fraction with validation (rejects NaN, infinite, outside [0, 1])
    pub fn try_new(val: f64) -> Result<Fraction, NumericError> {
        let val = check_finite(val)?;
        if !(0.0..=1.0).contains(&val) {
            Err(NumericError::OutOfRange(val))
        } else {
            Ok(Fraction(val))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// The same position measured from the opposite corner
    #[inline]
    pub fn complement(self) -> Fraction {
        Fraction(1.0 - self.0)
    }
}

/// An axis-aligned box in pixel space, the thing a curve connects.
///
/// `offset_x`/`offset_y` shift the whole box (and therefore all of its
/// anchors) without touching `x`/`y`, which is how hosts account for borders
/// or label padding.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct NodeBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl NodeBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        NodeBox {
            x,
            y,
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    pub fn with_offset(self, offset_x: f64, offset_y: f64) -> Self {
        NodeBox {
            offset_x,
            offset_y,
            ..self
        }
    }

    /// Top-left corner after applying the offset
    pub fn origin(&self) -> DVec2 {
        dvec2(self.x + self.offset_x, self.y + self.offset_y)
    }

    pub fn size(&self) -> DVec2 {
        dvec2(self.width, self.height)
    }

    /// Reject boxes whose anchors would be NaN or infinite
    pub fn validate(&self) -> Result<(), CurveError> {
        let fields = [
            ("x", self.x),
            ("y", self.y),
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
        ];
        for (field, val) in fields {
            check_finite(val).map_err(|source| CurveError::InvalidBox { field, source })?;
        }
        for (field, val) in [("width", self.width), ("height", self.height)] {
            Px::try_non_negative(val).map_err(|source| CurveError::InvalidBox { field, source })?;
        }
        Ok(())
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Closed overlap test: touching edges count
    pub fn intersects(&self, other: &BBox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
