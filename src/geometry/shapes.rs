//! Geometry kinds a curve can be tested against.
//!
//! Every kind implements [`PolylineGeometry`]; [`Geometry`] is the closed set
//! this crate ships, dispatched with `enum_dispatch`. Host types can implement
//! the trait themselves and take part in [`intersects`] without being wrapped.

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use crate::connect::CubicCurve;
use crate::errors::CurveError;
use crate::types::BBox;

use super::segment::{Segment, sorted_segments};
use super::sweep::sweep_intersects;

/// What a geometry is, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    LineString,
    LinearRing,
    Curve,
    Collection,
    /// A host-defined kind
    Other(&'static str),
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryKind::Point => f.write_str("point"),
            GeometryKind::LineString => f.write_str("line string"),
            GeometryKind::LinearRing => f.write_str("linear ring"),
            GeometryKind::Curve => f.write_str("curve"),
            GeometryKind::Collection => f.write_str("collection"),
            GeometryKind::Other(name) => f.write_str(name),
        }
    }
}

/// A vertex in projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn to_vec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        self.to_vec2().distance(other.to_vec2())
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

/// Common behavior for everything that can take part in intersection tests
#[enum_dispatch]
pub trait PolylineGeometry {
    fn kind(&self) -> GeometryKind;

    /// Vertices in order
    fn points(&self) -> Vec<Point>;

    /// Segments sorted by left endpoint, or `None` if this kind has no
    /// segment view of its own
    fn sorted_segments(&self) -> Option<Vec<Segment>> {
        Some(sorted_segments(&self.points()))
    }

    /// Member geometries, for kinds that are made of other geometries
    fn members(&self) -> Option<&[Geometry]> {
        None
    }

    fn bounds(&self) -> BBox {
        let mut bounds = BBox::new();
        for p in self.points() {
            bounds.expand_point(p.to_vec2());
        }
        bounds
    }

    /// Sum of segment lengths
    fn length(&self) -> f64 {
        self.points().windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

impl PolylineGeometry for Point {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Point
    }

    fn points(&self) -> Vec<Point> {
        vec![*self]
    }

    fn sorted_segments(&self) -> Option<Vec<Segment>> {
        Some(vec![Segment::degenerate(*self)])
    }
}

/// An open polyline
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    pub fn new(points: Vec<Point>) -> Self {
        LineString { points }
    }
}

impl PolylineGeometry for LineString {
    fn kind(&self) -> GeometryKind {
        GeometryKind::LineString
    }

    fn points(&self) -> Vec<Point> {
        self.points.clone()
    }
}

/// A closed polyline; the last point always repeats the first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearRing {
    points: Vec<Point>,
}

impl LinearRing {
    pub fn new(mut points: Vec<Point>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if points.len() > 1 && first != last {
                points.push(first);
            }
        }
        LinearRing { points }
    }
}

impl PolylineGeometry for LinearRing {
    fn kind(&self) -> GeometryKind {
        GeometryKind::LinearRing
    }

    fn points(&self) -> Vec<Point> {
        self.points.clone()
    }
}

/// Several geometries treated as one
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection {
    members: Vec<Geometry>,
}

impl Collection {
    pub fn new(members: Vec<Geometry>) -> Self {
        Collection { members }
    }
}

impl PolylineGeometry for Collection {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Collection
    }

    fn points(&self) -> Vec<Point> {
        self.members.iter().flat_map(|m| m.points()).collect()
    }

    fn sorted_segments(&self) -> Option<Vec<Segment>> {
        None
    }

    fn members(&self) -> Option<&[Geometry]> {
        Some(&self.members)
    }

    fn length(&self) -> f64 {
        self.members.iter().map(|m| m.length()).sum()
    }
}

/// All geometry kinds shipped with the crate
#[enum_dispatch(PolylineGeometry)]
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point,
    LineString,
    LinearRing,
    CubicCurve,
    Collection,
}

impl Geometry {
    pub fn intersects(&self, other: &Geometry) -> Result<bool, CurveError> {
        intersects(self, other)
    }
}

/// Whether two geometries share at least one point.
///
/// Two kinds with segments are swept against each other. Otherwise a
/// collection answers for its members, and anything else hands the question to
/// the other side once. If that side cannot answer either, the pair is
/// unsupported.
pub fn intersects(a: &dyn PolylineGeometry, b: &dyn PolylineGeometry) -> Result<bool, CurveError> {
    dispatch(a, b, false)
}

fn dispatch(
    a: &dyn PolylineGeometry,
    b: &dyn PolylineGeometry,
    delegated: bool,
) -> Result<bool, CurveError> {
    if let (Some(segs_a), Some(segs_b)) = (a.sorted_segments(), b.sorted_segments()) {
        return Ok(sweep_intersects(&segs_a, &segs_b));
    }
    if let Some(members) = a.members() {
        for member in members {
            if dispatch(member, b, false)? {
                return Ok(true);
            }
        }
        return Ok(false);
    }
    if delegated {
        return Err(CurveError::UnsupportedGeometry {
            left: b.kind(),
            right: a.kind(),
        });
    }
    dispatch(b, a, true)
}
