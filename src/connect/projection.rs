//! Mapping pixel-space curve points into the host's coordinate system.

use glam::DVec2;

use crate::connect::builder::PixelPath;
use crate::connect::round_coord;
use crate::errors::CurveError;
use crate::geometry::Point;
use crate::types::NumericError;

/// A position in the projected (geographic) coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        GeoPoint { lon, lat }
    }
}

/// Converts screen pixels into geographic coordinates.
pub trait Projector {
    fn pixel_to_geo(&self, pixel: DVec2) -> GeoPoint;

    /// Whether the projector can currently map pixels (a viewport with no
    /// size, for instance, cannot)
    fn is_available(&self) -> bool {
        true
    }
}

impl<F> Projector for F
where
    F: Fn(DVec2) -> GeoPoint,
{
    fn pixel_to_geo(&self, pixel: DVec2) -> GeoPoint {
        self(pixel)
    }
}

/// A map viewport: `size` pixels centred on `center`, `resolution` map units per pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: GeoPoint,
    resolution: f64,
    size: DVec2,
}

impl Viewport {
    pub fn try_new(center: GeoPoint, resolution: f64, size: DVec2) -> Result<Self, CurveError> {
        let invalid = |field, source| CurveError::InvalidConfig { field, source };
        if !resolution.is_finite() {
            let source = if resolution.is_nan() {
                NumericError::NaN
            } else {
                NumericError::Infinite
            };
            return Err(invalid("resolution", source));
        }
        if resolution < 0.0 {
            return Err(invalid("resolution", NumericError::Negative));
        }
        if !size.is_finite() {
            return Err(invalid("size", NumericError::Infinite));
        }
        if size.x < 0.0 || size.y < 0.0 {
            return Err(invalid("size", NumericError::Negative));
        }
        Ok(Viewport {
            center,
            resolution,
            size,
        })
    }
}

impl Projector for Viewport {
    fn pixel_to_geo(&self, pixel: DVec2) -> GeoPoint {
        let half = self.size / 2.0;
        GeoPoint {
            lon: self.center.lon + (pixel.x - half.x) * self.resolution,
            lat: self.center.lat - (pixel.y - half.y) * self.resolution,
        }
    }

    fn is_available(&self) -> bool {
        self.resolution > 0.0 && self.size.x > 0.0 && self.size.y > 0.0
    }
}

/// Project every pixel point, rounding coordinates to three decimals.
pub fn project(path: &PixelPath, projector: &dyn Projector) -> Vec<Point> {
    path.to_vec()
        .into_iter()
        .map(|pixel| {
            let geo = projector.pixel_to_geo(pixel);
            Point::new(round_coord(geo.lon), round_coord(geo.lat))
        })
        .collect()
}
