//! Line segments between consecutive vertices, ordered for sweeping.

use super::Point;

/// A segment with endpoints ordered so that `x1 <= x2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    /// Segment between two points, swapped if needed to run left to right.
    pub fn new(a: Point, b: Point) -> Self {
        let (left, right) = if a.x < b.x { (a, b) } else { (b, a) };
        Segment {
            x1: left.x,
            y1: left.y,
            x2: right.x,
            y2: right.y,
        }
    }

    /// Zero-length segment standing in for a point
    pub fn degenerate(p: Point) -> Self {
        Segment {
            x1: p.x,
            y1: p.y,
            x2: p.x,
            y2: p.y,
        }
    }

    pub fn min_y(&self) -> f64 {
        self.y1.min(self.y2)
    }

    pub fn max_y(&self) -> f64 {
        self.y1.max(self.y2)
    }

    pub fn length(&self) -> f64 {
        Point::new(self.x1, self.y1).distance(Point::new(self.x2, self.y2))
    }

    /// Exact intersection test, endpoints included.
    ///
    /// Parallel segments only intersect when they are collinear; callers are
    /// expected to have checked bounding-box overlap first, which rules out
    /// collinear segments that merely share a line.
    pub fn intersects(&self, other: &Segment) -> bool {
        let x11_21 = self.x1 - other.x1;
        let y11_21 = self.y1 - other.y1;
        let x12_11 = self.x2 - self.x1;
        let y12_11 = self.y2 - self.y1;
        let x22_21 = other.x2 - other.x1;
        let y22_21 = other.y2 - other.y1;

        let d = y22_21 * x12_11 - x22_21 * y12_11;
        let n1 = x22_21 * y11_21 - y22_21 * x11_21;
        let n2 = x12_11 * y11_21 - y12_11 * x11_21;

        if d == 0.0 {
            // parallel
            n1 == 0.0 && n2 == 0.0
        } else {
            let along1 = n1 / d;
            let along2 = n2 / d;
            (0.0..=1.0).contains(&along1) && (0.0..=1.0).contains(&along2)
        }
    }
}

/// One segment per consecutive pair of points, sorted by left endpoint.
///
/// Fewer than two points yield no segments.
pub fn sorted_segments(points: &[Point]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = points.windows(2).map(|w| Segment::new(w[0], w[1])).collect();
    segments.sort_by(|a, b| a.x1.total_cmp(&b.x1));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn new_orders_left_to_right() {
        let s = seg(10.0, 1.0, 0.0, 5.0);
        assert_eq!(
            s,
            Segment {
                x1: 0.0,
                y1: 5.0,
                x2: 10.0,
                y2: 1.0
            }
        );
    }

    #[test]
    fn sorted_by_left_endpoint() {
        let points = [
            Point::new(50.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(30.0, 5.0),
            Point::new(0.0, 0.0),
        ];
        let segs = sorted_segments(&points);
        assert_eq!(segs.len(), 3);
        let x1s: Vec<f64> = segs.iter().map(|s| s.x1).collect();
        assert_eq!(x1s, vec![0.0, 10.0, 10.0]);
        assert!(segs.iter().all(|s| s.x1 <= s.x2));
    }

    #[test]
    fn too_few_points_give_no_segments() {
        assert!(sorted_segments(&[]).is_empty());
        assert!(sorted_segments(&[Point::new(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(seg(0.0, 0.0, 10.0, 10.0).intersects(&seg(0.0, 10.0, 10.0, 0.0)));
    }

    #[test]
    fn touching_endpoints_intersect() {
        assert!(seg(0.0, 0.0, 5.0, 5.0).intersects(&seg(5.0, 5.0, 10.0, 0.0)));
    }

    #[test]
    fn separated_segments_do_not_intersect() {
        assert!(!seg(0.0, 0.0, 10.0, 0.0).intersects(&seg(0.0, 1.0, 10.0, 2.0)));
        assert!(!seg(0.0, 0.0, 4.0, 4.0).intersects(&seg(5.0, 0.0, 10.0, -5.0)));
    }

    #[test]
    fn collinear_overlap_intersects() {
        assert!(seg(0.0, 0.0, 10.0, 0.0).intersects(&seg(5.0, 0.0, 15.0, 0.0)));
    }

    #[test]
    fn point_on_segment_intersects() {
        let p = Segment::degenerate(Point::new(5.0, 5.0));
        assert!(seg(0.0, 0.0, 10.0, 10.0).intersects(&p));
        let off = Segment::degenerate(Point::new(5.0, 6.0));
        assert!(!seg(0.0, 0.0, 10.0, 10.0).intersects(&off));
    }

    #[test]
    fn length_of_segment() {
        assert_eq!(seg(0.0, 0.0, 3.0, 4.0).length(), 5.0);
    }
}
