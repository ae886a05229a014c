//! Routing connector curves between boxes
//!
//! This module is organized into submodules:
//! - `defaults`: Default offsets, positions and limits
//! - `config`: `CurveConfig`, validated per-curve settings
//! - `anchor`: picking the side of each box to connect
//! - `builder`: control points and arrowhead
//! - `projection`: pixel to geographic mapping
//! - `curve`: `CubicCurve`, the stateful host-facing geometry

pub mod anchor;
pub mod builder;
pub mod config;
pub mod curve;
pub mod defaults;
pub mod projection;

pub use anchor::{AnchorPair, Anchors, Side, select_anchors};
pub use builder::{Arrowhead, PixelPath, build_curve};
pub use config::CurveConfig;
pub use curve::CubicCurve;
pub use projection::{GeoPoint, Projector, Viewport, project};

use crate::errors::CurveError;
use crate::types::NodeBox;

/// Anchor selection followed by curve building, as one pure step.
pub fn route(from: &NodeBox, to: &NodeBox, config: &CurveConfig) -> Result<PixelPath, CurveError> {
    from.validate()?;
    to.validate()?;
    let anchors = select_anchors(from, to, config);
    build_curve(&anchors, config)
}

/// Round to the crate's coordinate precision
pub(crate) fn round_coord(value: f64) -> f64 {
    let scale = 10_f64.powi(defaults::COORD_DECIMALS);
    (value * scale).round() / scale
}
