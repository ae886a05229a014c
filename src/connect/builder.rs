//! Control points and arrowhead for a connector between two anchors.

use glam::{DVec2, dvec2};

use crate::connect::anchor::{AnchorPair, Anchors, Side};
use crate::connect::config::CurveConfig;
use crate::connect::round_coord;
use crate::errors::CurveError;

/// Two points forming a caret at the end of a directed curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrowhead {
    pub left: DVec2,
    pub right: DVec2,
}

/// A cubic Bézier connector in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPath {
    pub pair: AnchorPair,
    pub start: DVec2,
    pub ctrl1: DVec2,
    pub ctrl2: DVec2,
    pub end: DVec2,
    pub arrow: Option<Arrowhead>,
}

impl PixelPath {
    /// `[start, ctrl1, ctrl2, end]`, followed by `[left, right]` when directed
    pub fn to_vec(&self) -> Vec<DVec2> {
        let mut points = vec![self.start, self.ctrl1, self.ctrl2, self.end];
        if let Some(arrow) = self.arrow {
            points.push(arrow.left);
            points.push(arrow.right);
        }
        points
    }

    pub fn len(&self) -> usize {
        if self.arrow.is_some() { 6 } else { 4 }
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Control point leaving `anchor` perpendicular to the edge it sits on
fn control_point(anchor: DVec2, side: Side, bow: DVec2) -> DVec2 {
    anchor + side.outward() * bow
}

/// Caret points at `end`, built from the tangent `end - ctrl` scaled to `length`.
///
/// The tangent is normalised, pointed back along the curve, and each caret point
/// is the end offset by that vector plus or minus its swapped components.
pub fn arrowhead(ctrl: DVec2, end: DVec2, length: f64) -> Result<Arrowhead, CurveError> {
    let tangent = end - ctrl;
    let mag = tangent.length();
    if !mag.is_finite() || mag <= f64::EPSILON {
        return Err(CurveError::DegenerateTangent { x: end.x, y: end.y });
    }

    let back = -tangent * (length / mag);
    let left = end + dvec2(back.x + back.y, back.y + back.x);
    let right = end + dvec2(back.x - back.y, back.y - back.x);

    Ok(Arrowhead {
        left: dvec2(round_coord(left.x), round_coord(left.y)),
        right: dvec2(round_coord(right.x), round_coord(right.y)),
    })
}

/// Derive control points (and the arrowhead when directed) for selected anchors.
pub fn build_curve(anchors: &Anchors, config: &CurveConfig) -> Result<PixelPath, CurveError> {
    let Anchors { pair, start, end } = *anchors;
    let min_bow = config.min_bow.raw();
    let bow = dvec2(
        ((start.x - end.x).abs() / 2.0).max(min_bow),
        ((start.y - end.y).abs() / 2.0).max(min_bow),
    );

    let ctrl1 = control_point(start, pair.from, bow);
    let ctrl2 = control_point(end, pair.to, bow);

    let arrow = if config.directed {
        Some(arrowhead(ctrl2, end, config.arrow_length.raw())?)
    } else {
        None
    };

    Ok(PixelPath {
        pair,
        start,
        ctrl1,
        ctrl2,
        end,
        arrow,
    })
}
