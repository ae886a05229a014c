//! Per-curve configuration.

use crate::errors::CurveError;
use crate::types::{Fraction, Px};

use super::defaults;

/// Settings fixed when a curve is created.
///
/// Raw numbers go through the `with_*` methods, which validate them; the
/// fields themselves are already-checked newtypes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig {
    pub tolerance: Px,
    pub offset: Px,
    pub start_position: Fraction,
    pub end_position: Fraction,
    pub directed: bool,
    pub arrow_length: Px,
    pub min_bow: Px,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            tolerance: defaults::TOLERANCE,
            offset: defaults::OFFSET,
            start_position: defaults::START_POSITION,
            end_position: defaults::END_POSITION,
            directed: defaults::DIRECTED,
            arrow_length: defaults::ARROW_LENGTH,
            min_bow: defaults::MIN_BOW,
        }
    }
}

fn length(field: &'static str, val: f64) -> Result<Px, CurveError> {
    Px::try_non_negative(val).map_err(|source| CurveError::InvalidConfig { field, source })
}

fn fraction(field: &'static str, val: f64) -> Result<Fraction, CurveError> {
    Fraction::try_new(val).map_err(|source| CurveError::InvalidConfig { field, source })
}

impl CurveConfig {
    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, CurveError> {
        Ok(Self {
            tolerance: length("tolerance", tolerance)?,
            ..self
        })
    }

    pub fn with_offset(self, offset: f64) -> Result<Self, CurveError> {
        Ok(Self {
            offset: length("offset", offset)?,
            ..self
        })
    }

    /// Set where anchors sit along the sides of the first and second box.
    pub fn with_positions(self, start: f64, end: f64) -> Result<Self, CurveError> {
        Ok(Self {
            start_position: fraction("start_position", start)?,
            end_position: fraction("end_position", end)?,
            ..self
        })
    }

    pub fn with_arrow_length(self, arrow_length: f64) -> Result<Self, CurveError> {
        Ok(Self {
            arrow_length: length("arrow_length", arrow_length)?,
            ..self
        })
    }

    pub fn with_min_bow(self, min_bow: f64) -> Result<Self, CurveError> {
        Ok(Self {
            min_bow: length("min_bow", min_bow)?,
            ..self
        })
    }

    pub fn directed(self, directed: bool) -> Self {
        Self { directed, ..self }
    }

    /// Number of points a built curve carries
    pub fn point_count(&self) -> usize {
        if self.directed { 6 } else { 4 }
    }
}
