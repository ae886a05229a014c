//! The connector geometry a host keeps per edge.

use crate::connect::builder::PixelPath;
use crate::connect::config::CurveConfig;
use crate::connect::defaults;
use crate::connect::projection::{Projector, project};
use crate::connect::route;
use crate::errors::CurveError;
use crate::geometry::{GeometryKind, Point, PolylineGeometry, intersects};
use crate::log::{debug, warn};
use crate::types::NodeBox;

/// A directed (or undirected) cubic connector between two boxes.
///
/// Usage is two-phase: [`calculate_pixels`](Self::calculate_pixels) routes
/// the curve in screen space, then [`update_components`](Self::update_components)
/// projects it into the host's coordinates. Each call recomputes its output
/// wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CubicCurve {
    config: CurveConfig,
    pixels: Option<PixelPath>,
    components: Vec<Point>,
}

impl CubicCurve {
    pub fn new(config: CurveConfig) -> Self {
        CubicCurve {
            config,
            pixels: None,
            components: Vec::new(),
        }
    }

    /// A curve whose projected points are already known
    pub fn from_components(config: CurveConfig, components: Vec<Point>) -> Self {
        CubicCurve {
            config,
            pixels: None,
            components,
        }
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Screen-space path from the last successful `calculate_pixels`
    pub fn pixels(&self) -> Option<&PixelPath> {
        self.pixels.as_ref()
    }

    /// Projected points: start, two controls, end, then the arrowhead if directed
    pub fn components(&self) -> &[Point] {
        &self.components
    }

    /// Route the curve between two boxes in pixel space.
    ///
    /// Returns `Ok(false)` without touching anything if either box is missing.
    /// On error the previously computed pixels are kept.
    pub fn calculate_pixels(
        &mut self,
        from: Option<&NodeBox>,
        to: Option<&NodeBox>,
    ) -> Result<bool, CurveError> {
        let (Some(from), Some(to)) = (from, to) else {
            debug!("calculate_pixels: missing box, keeping previous path");
            return Ok(false);
        };
        self.pixels = Some(route(from, to, &self.config)?);
        Ok(true)
    }

    /// Replace the components with the projected pixel path.
    ///
    /// Does nothing (and returns `false`) without a usable projector or before
    /// pixels have been calculated.
    pub fn update_components(&mut self, projector: Option<&dyn Projector>) -> bool {
        let Some(projector) = projector.filter(|p| p.is_available()) else {
            warn!("update_components: no usable projector");
            return false;
        };
        let Some(path) = &self.pixels else {
            warn!("update_components: pixels not calculated yet");
            return false;
        };
        self.components = project(path, projector);
        true
    }

    /// Insert a point at `index`, or append when `index` is `None` or past the end.
    pub fn add_component(&mut self, point: Point, index: Option<usize>) {
        match index {
            Some(i) if i < self.components.len() => self.components.insert(i, point),
            _ => self.components.push(point),
        }
    }

    /// Remove the first point equal to `point`, unless that would leave fewer
    /// than start + two controls + end.
    pub fn remove_component(&mut self, point: &Point) -> bool {
        if self.components.len() <= defaults::MIN_COMPONENTS {
            debug!(
                count = self.components.len(),
                "remove_component: curve already minimal"
            );
            return false;
        }
        match self.components.iter().position(|c| c == point) {
            Some(i) => {
                self.components.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn intersects(&self, other: &dyn PolylineGeometry) -> Result<bool, CurveError> {
        intersects(self, other)
    }
}

impl PolylineGeometry for CubicCurve {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Curve
    }

    fn points(&self) -> Vec<Point> {
        self.components.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::projection::GeoPoint;
    use glam::DVec2;

    fn identity(p: DVec2) -> GeoPoint {
        GeoPoint::new(p.x, p.y)
    }

    fn boxes() -> (NodeBox, NodeBox) {
        (
            NodeBox::new(0.0, 0.0, 100.0, 50.0),
            NodeBox::new(300.0, 0.0, 100.0, 50.0),
        )
    }

    fn built(config: CurveConfig) -> CubicCurve {
        let (a, b) = boxes();
        let mut curve = CubicCurve::new(config);
        assert_eq!(curve.calculate_pixels(Some(&a), Some(&b)), Ok(true));
        assert!(curve.update_components(Some(&identity as &dyn Projector)));
        curve
    }

    #[test]
    fn directed_curve_has_six_points() {
        let curve = built(CurveConfig::default());
        assert_eq!(curve.components().len(), 6);
        assert_eq!(curve.components()[0], Point::new(105.0, 12.5));
        assert_eq!(curve.components()[3], Point::new(295.0, 12.5));
    }

    #[test]
    fn undirected_curve_has_four_points() {
        let curve = built(CurveConfig::default().directed(false));
        assert_eq!(curve.components().len(), 4);
    }

    #[test]
    fn missing_box_is_a_no_op() {
        let (a, _) = boxes();
        let mut curve = built(CurveConfig::default());
        let before = curve.pixels().copied();
        assert_eq!(curve.calculate_pixels(Some(&a), None), Ok(false));
        assert_eq!(curve.calculate_pixels(None, None), Ok(false));
        assert_eq!(curve.pixels().copied(), before);
    }

    #[test]
    fn invalid_box_keeps_previous_pixels() {
        let (a, _) = boxes();
        let mut curve = built(CurveConfig::default());
        let before = curve.pixels().copied();
        let bad = NodeBox::new(f64::INFINITY, 0.0, 10.0, 10.0);
        assert!(curve.calculate_pixels(Some(&a), Some(&bad)).is_err());
        assert_eq!(curve.pixels().copied(), before);
    }

    #[test]
    fn update_without_projector_is_a_no_op() {
        let mut curve = built(CurveConfig::default());
        let before = curve.components().to_vec();
        assert!(!curve.update_components(None));
        assert_eq!(curve.components(), before.as_slice());
    }

    #[test]
    fn update_before_pixels_is_a_no_op() {
        let mut curve = CubicCurve::new(CurveConfig::default());
        assert!(!curve.update_components(Some(&identity as &dyn Projector)));
        assert!(curve.components().is_empty());
    }

    #[test]
    fn update_replaces_components_wholesale() {
        let mut curve = built(CurveConfig::default());
        let shifted = |p: DVec2| GeoPoint::new(p.x + 1000.0, p.y);
        assert!(curve.update_components(Some(&shifted as &dyn Projector)));
        assert_eq!(curve.components().len(), 6);
        assert!(curve.components().iter().all(|p| p.x > 1000.0));
    }

    #[test]
    fn removal_stops_at_four_points() {
        let mut curve = built(CurveConfig::default());
        let arrow_left = curve.components()[4];
        let arrow_right = curve.components()[5];
        assert!(curve.remove_component(&arrow_left));
        assert!(curve.remove_component(&arrow_right));
        assert_eq!(curve.components().len(), 4);

        let start = curve.components()[0];
        assert!(!curve.remove_component(&start));
        assert_eq!(curve.components().len(), 4);
    }

    #[test]
    fn removing_unknown_point_fails() {
        let mut curve = built(CurveConfig::default());
        assert!(!curve.remove_component(&Point::new(-1.0, -1.0)));
        assert_eq!(curve.components().len(), 6);
    }

    #[test]
    fn add_component_inserts_or_appends() {
        let mut curve = CubicCurve::default();
        curve.add_component(Point::new(1.0, 1.0), None);
        curve.add_component(Point::new(3.0, 3.0), Some(10));
        curve.add_component(Point::new(2.0, 2.0), Some(1));
        let xs: Vec<f64> = curve.components().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }
}
