//! Error types with diagnostic codes using miette
//!
//! Most degenerate inputs are not errors: a missing box, a missing projector or
//! a removal below the minimum point count are silent no-ops. What remains here
//! are the cases where continuing would produce garbage geometry.

use miette::Diagnostic;
use thiserror::Error;

use crate::geometry::GeometryKind;
use crate::types::NumericError;

/// Errors raised while configuring, routing or testing curves
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("invalid curve setting `{field}`: {source}")]
    #[diagnostic(
        code(graffle::config::invalid),
        help("lengths must be finite and non-negative, positions must lie in [0, 1]")
    )]
    InvalidConfig {
        field: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("invalid box `{field}`: {source}")]
    #[diagnostic(code(graffle::connect::invalid_box))]
    InvalidBox {
        field: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("arrowhead tangent at ({x}, {y}) has no length")]
    #[diagnostic(
        code(graffle::connect::degenerate_tangent),
        help("the last control point coincides with the end anchor")
    )]
    DegenerateTangent { x: f64, y: f64 },

    #[error("cannot test {left} against {right} for intersection")]
    #[diagnostic(
        code(graffle::geometry::unsupported),
        help("at least one side must expose segments or member geometries")
    )]
    UnsupportedGeometry {
        left: GeometryKind,
        right: GeometryKind,
    },
}
