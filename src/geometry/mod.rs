//! Geometry kinds and intersection testing
//!
//! This module is organized into submodules:
//! - `segment`: left-to-right segments and the exact segment test
//! - `sweep`: sorted-segment sweep over two polylines
//! - `shapes`: the `PolylineGeometry` capability, `Geometry` and dispatch

pub mod segment;
pub mod shapes;
pub mod sweep;

pub use segment::{Segment, sorted_segments};
pub use shapes::{
    Collection, Geometry, GeometryKind, LineString, LinearRing, Point, PolylineGeometry,
    intersects,
};
pub use sweep::{sweep_intersects, sweep_intersects_with};
