//! Cubic connector curves between boxes.
//!
//! Given two boxes in screen space, graffle picks a side of each box to
//! connect, bends a cubic Bézier between them so it leaves and enters
//! perpendicular to the box edges, and optionally adds an arrowhead at the
//! end. The resulting points are projected into the host's coordinate
//! system through a [`Projector`].
//!
//! ```
//! use glam::DVec2;
//! use graffle::{CubicCurve, CurveConfig, GeoPoint, NodeBox, Projector};
//!
//! let from = NodeBox::new(0.0, 0.0, 100.0, 50.0);
//! let to = NodeBox::new(300.0, 0.0, 100.0, 50.0);
//! let identity = |p: DVec2| GeoPoint::new(p.x, p.y);
//!
//! let mut curve = CubicCurve::new(CurveConfig::default());
//! curve.calculate_pixels(Some(&from), Some(&to))?;
//! curve.update_components(Some(&identity as &dyn Projector));
//! assert_eq!(curve.components().len(), 6);
//! # Ok::<(), graffle::CurveError>(())
//! ```
//!
//! Curves also take part in intersection tests against points, line strings,
//! rings and collections; see [`geometry::intersects`].

pub mod connect;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod types;

pub use connect::{
    AnchorPair, Anchors, Arrowhead, CubicCurve, CurveConfig, GeoPoint, PixelPath, Projector,
    Side, Viewport, route,
};
pub use errors::CurveError;
pub use geometry::{
    Collection, Geometry, GeometryKind, LineString, LinearRing, Point, PolylineGeometry, Segment,
};
pub use types::{BBox, Fraction, NodeBox, NumericError, Px};
