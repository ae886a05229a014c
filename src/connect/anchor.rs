//! Anchor selection: which side of each box a connector leaves and enters.
//!
//! Each box gets four candidate anchors, one per side. They do not sit at the
//! side midpoints: the first box uses `start_position` along each side and the
//! second box `end_position`, so several curves between the same boxes fan out
//! instead of stacking on one point.
//!
//! Side points walk the perimeter clockwise (screen coordinates, Y down):
//!
//! ```text
//!            N: (x + w*t, y)
//!   W: (x, y + h*(1-t))     E: (x + w, y + h*t)
//!            S: (x + w*(1-t), y + h)
//! ```
//!
//! Candidates are pushed outward by `offset` (the gap kept to the box) and by
//! `tolerance` before measuring. The tolerance only biases the choice toward
//! well separated pairs and is removed again before the anchors are returned.

use glam::{DVec2, dvec2};

use crate::connect::config::CurveConfig;
use crate::log::{debug, trace};
use crate::types::{Fraction, NodeBox};

/// A side of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    South,
    West,
    East,
}

impl Side {
    /// Iteration order used by anchor selection; ties go to the earlier side.
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::West, Side::East];

    /// Slot of this side within a box's four anchors
    pub fn index(self) -> usize {
        match self {
            Side::North => 0,
            Side::South => 1,
            Side::West => 2,
            Side::East => 3,
        }
    }

    /// Unit vector pointing away from the box (Y-down)
    pub fn outward(self) -> DVec2 {
        match self {
            Side::North => dvec2(0.0, -1.0),
            Side::South => dvec2(0.0, 1.0),
            Side::West => dvec2(-1.0, 0.0),
            Side::East => dvec2(1.0, 0.0),
        }
    }

    /// The side that faces this one when mirrored about a vertical axis
    pub fn mirrored(self) -> Side {
        match self {
            Side::West => Side::East,
            Side::East => Side::West,
            other => other,
        }
    }

    pub fn is_horizontal_edge(self) -> bool {
        matches!(self, Side::North | Side::South)
    }
}

/// The chosen sides, `from` on the first box and `to` on the second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorPair {
    pub from: Side,
    pub to: Side,
}

impl AnchorPair {
    /// Used when no pair passes the compatibility filter
    pub const FALLBACK: AnchorPair = AnchorPair {
        from: Side::North,
        to: Side::North,
    };

    /// Slots in the eight-anchor layout: `0..4` for the first box, `4..8` for the second
    pub fn indices(self) -> (usize, usize) {
        (self.from.index(), self.to.index() + 4)
    }
}

/// Selected anchors with the tolerance push removed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub pair: AnchorPair,
    pub start: DVec2,
    pub end: DVec2,
}

/// The eight candidate anchors: `[N, S, W, E]` of the first box, then of the second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSet {
    points: [DVec2; 8],
}

fn side_point(b: &NodeBox, side: Side, position: Fraction) -> DVec2 {
    let origin = b.origin();
    let size = b.size();
    let t = position.raw();
    let rest = position.complement().raw();
    match side {
        Side::North => dvec2(origin.x + size.x * t, origin.y),
        Side::South => dvec2(origin.x + size.x * rest, origin.y + size.y),
        Side::West => dvec2(origin.x, origin.y + size.y * rest),
        Side::East => dvec2(origin.x + size.x, origin.y + size.y * t),
    }
}

/// Whether a pair of anchors may be joined.
///
/// Same sides always may. Otherwise an anchor may not be used if the other
/// anchor lies behind the side it sits on: the first box's East anchor only
/// connects to points right of it, a second-box West anchor only to points
/// left of it, and so on.
fn compatible(from: Side, a: DVec2, to: Side, b: DVec2) -> bool {
    if from == to {
        return true;
    }
    ((from != Side::East && to != Side::West) || a.x < b.x)
        && ((from != Side::West && to != Side::East) || a.x > b.x)
        && ((from != Side::North && to != Side::South) || a.y > b.y)
        && ((from != Side::South && to != Side::North) || a.y < b.y)
}

impl AnchorSet {
    /// Perimeter anchors of both boxes, not yet pushed outward.
    pub fn for_boxes(from: &NodeBox, to: &NodeBox, start: Fraction, end: Fraction) -> Self {
        let mut points = [DVec2::ZERO; 8];
        for side in Side::ALL {
            points[side.index()] = side_point(from, side, start);
            points[side.index() + 4] = side_point(to, side, end);
        }
        AnchorSet { points }
    }

    #[cfg(test)]
    pub(crate) fn from_points(points: [DVec2; 8]) -> Self {
        AnchorSet { points }
    }

    /// Move every anchor `amount` pixels away from its box; negative moves inward.
    pub fn push_out(&mut self, amount: f64) {
        for side in Side::ALL {
            let step = side.outward() * amount;
            self.points[side.index()] += step;
            self.points[side.index() + 4] += step;
        }
    }

    pub fn from_anchor(&self, side: Side) -> DVec2 {
        self.points[side.index()]
    }

    pub fn to_anchor(&self, side: Side) -> DVec2 {
        self.points[side.index() + 4]
    }

    /// Compatible pair with the smallest Manhattan distance.
    ///
    /// Scans first-box sides in the outer loop and second-box sides in the
    /// inner loop; on equal distances the pair found first is kept.
    pub fn closest_pair(&self) -> Option<(AnchorPair, f64)> {
        let mut best: Option<(AnchorPair, f64)> = None;
        for from in Side::ALL {
            for to in Side::ALL {
                let a = self.from_anchor(from);
                let b = self.to_anchor(to);
                if !compatible(from, a, to, b) {
                    continue;
                }
                let delta = (a - b).abs();
                let distance = delta.x + delta.y;
                trace!(?from, ?to, distance, "anchor candidate");
                if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                    best = Some((AnchorPair { from, to }, distance));
                }
            }
        }
        best
    }
}

/// Pick the anchors a curve from `from` to `to` should use.
pub fn select_anchors(from: &NodeBox, to: &NodeBox, config: &CurveConfig) -> Anchors {
    let mut set = AnchorSet::for_boxes(from, to, config.start_position, config.end_position);
    set.push_out(config.offset.raw());
    set.push_out(config.tolerance.raw());

    let pair = match set.closest_pair() {
        Some((pair, distance)) => {
            debug!(from = ?pair.from, to = ?pair.to, distance, "selected anchors");
            pair
        }
        None => {
            debug!("no compatible anchor pair, falling back to north/north");
            AnchorPair::FALLBACK
        }
    };

    set.push_out(-config.tolerance.raw());
    Anchors {
        pair,
        start: set.from_anchor(pair.from),
        end: set.to_anchor(pair.to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side_by_side() -> (NodeBox, NodeBox) {
        (
            NodeBox::new(0.0, 0.0, 100.0, 50.0),
            NodeBox::new(300.0, 0.0, 100.0, 50.0),
        )
    }

    #[test]
    fn anchors_sit_at_quarter_positions() {
        let (a, b) = side_by_side();
        let set = AnchorSet::for_boxes(&a, &b, Fraction::of(0.25), Fraction::of(0.75));
        assert_eq!(set.from_anchor(Side::North), dvec2(25.0, 0.0));
        assert_eq!(set.from_anchor(Side::South), dvec2(75.0, 50.0));
        assert_eq!(set.from_anchor(Side::West), dvec2(0.0, 37.5));
        assert_eq!(set.from_anchor(Side::East), dvec2(100.0, 12.5));
        assert_eq!(set.to_anchor(Side::North), dvec2(375.0, 0.0));
        assert_eq!(set.to_anchor(Side::South), dvec2(325.0, 50.0));
        assert_eq!(set.to_anchor(Side::West), dvec2(300.0, 12.5));
        assert_eq!(set.to_anchor(Side::East), dvec2(400.0, 37.5));
    }

    #[test]
    fn push_out_moves_away_from_box() {
        let (a, b) = side_by_side();
        let mut set = AnchorSet::for_boxes(&a, &b, Fraction::of(0.25), Fraction::of(0.75));
        set.push_out(5.0);
        assert_eq!(set.from_anchor(Side::North), dvec2(25.0, -5.0));
        assert_eq!(set.from_anchor(Side::East), dvec2(105.0, 12.5));
        assert_eq!(set.to_anchor(Side::South), dvec2(325.0, 55.0));
        assert_eq!(set.to_anchor(Side::West), dvec2(295.0, 12.5));
        set.push_out(-5.0);
        assert_eq!(set.from_anchor(Side::North), dvec2(25.0, 0.0));
    }

    #[test]
    fn side_by_side_boxes_use_east_and_west() {
        let (a, b) = side_by_side();
        let anchors = select_anchors(&a, &b, &CurveConfig::default());
        assert_eq!(
            anchors.pair,
            AnchorPair {
                from: Side::East,
                to: Side::West
            }
        );
        assert_eq!(anchors.pair.indices(), (3, 6));
        assert_eq!(anchors.start, dvec2(105.0, 12.5));
        assert_eq!(anchors.end, dvec2(295.0, 12.5));
    }

    #[test]
    fn stacked_boxes_use_south_and_north() {
        let a = NodeBox::new(0.0, 0.0, 100.0, 50.0);
        let b = NodeBox::new(0.0, 200.0, 100.0, 50.0);
        let anchors = select_anchors(&a, &b, &CurveConfig::default());
        assert_eq!(anchors.pair.indices(), (1, 4));
        assert_eq!(anchors.start, dvec2(75.0, 55.0));
        assert_eq!(anchors.end, dvec2(75.0, 195.0));
    }

    #[test]
    fn diagonal_boxes_leave_south_enter_west() {
        let a = NodeBox::new(0.0, 0.0, 100.0, 100.0);
        let b = NodeBox::new(300.0, 300.0, 100.0, 100.0);
        let anchors = select_anchors(&a, &b, &CurveConfig::default());
        assert_eq!(
            anchors.pair,
            AnchorPair {
                from: Side::South,
                to: Side::West
            }
        );
    }

    #[test]
    fn compatible_rejects_anchors_facing_away() {
        // East anchor with the target to its left
        assert!(!compatible(
            Side::East,
            dvec2(100.0, 0.0),
            Side::North,
            dvec2(50.0, 100.0)
        ));
        // Same sides are always allowed
        assert!(compatible(
            Side::East,
            dvec2(100.0, 0.0),
            Side::East,
            dvec2(50.0, 100.0)
        ));
        assert!(compatible(
            Side::South,
            dvec2(0.0, 10.0),
            Side::North,
            dvec2(0.0, 20.0)
        ));
    }

    #[test]
    fn equal_distances_keep_first_pair() {
        let set = AnchorSet::from_points([
            dvec2(0.0, 0.0),
            dvec2(1000.0, 0.0),
            dvec2(2000.0, 0.0),
            dvec2(3000.0, 0.0),
            dvec2(0.0, 100.0),
            dvec2(1000.0, 100.0),
            dvec2(2000.0, 100.0),
            dvec2(3000.0, 100.0),
        ]);
        let (pair, distance) = set.closest_pair().unwrap();
        assert_eq!(pair, AnchorPair::FALLBACK);
        assert_eq!(distance, 100.0);
    }

    #[test]
    fn distances_rounding_to_same_integer_stay_distinct() {
        let set = AnchorSet::from_points([
            dvec2(0.0, 0.0),
            dvec2(1000.0, 0.0),
            dvec2(2000.0, 0.0),
            dvec2(3000.0, 0.0),
            dvec2(0.0, 150.2),
            dvec2(1000.0, 150.4),
            dvec2(2000.0, 500.0),
            dvec2(3000.0, 500.0),
        ]);
        let (pair, distance) = set.closest_pair().unwrap();
        assert_eq!(
            pair,
            AnchorPair {
                from: Side::North,
                to: Side::North
            }
        );
        assert!((distance - 150.2).abs() < 1e-9);
    }

    #[test]
    fn mirrored_side() {
        assert_eq!(Side::East.mirrored(), Side::West);
        assert_eq!(Side::West.mirrored(), Side::East);
        assert_eq!(Side::North.mirrored(), Side::North);
    }
}
