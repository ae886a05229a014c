//! Sorted-segment sweep for polyline intersection.
//!
//! Not a real Bentley–Ottmann sweep: there is no event queue and no status
//! structure. Both inputs are sorted by left endpoint, which lets the inner
//! loop stop as soon as a segment starts right of the current one. Exact
//! intersection math only runs once the bounding boxes overlap.

use super::segment::Segment;

/// Whether any segment of `a` intersects any segment of `b`.
///
/// Both slices must be sorted by `x1` (see [`sorted_segments`](super::sorted_segments)).
pub fn sweep_intersects(a: &[Segment], b: &[Segment]) -> bool {
    sweep_intersects_with(a, b, |s1, s2| s1.intersects(s2))
}

/// [`sweep_intersects`] with a caller-supplied exact test.
pub fn sweep_intersects_with<F>(a: &[Segment], b: &[Segment], mut exact: F) -> bool
where
    F: FnMut(&Segment, &Segment) -> bool,
{
    for seg1 in a {
        for seg2 in b {
            if seg2.x1 > seg1.x2 {
                // seg2 and everything after it start right of seg1
                break;
            }
            if seg2.x2 < seg1.x1 {
                // seg2 still left of seg1
                continue;
            }
            if seg2.min_y() > seg1.max_y() || seg2.max_y() < seg1.min_y() {
                continue;
            }
            if exact(seg1, seg2) {
                return true;
            }
        }
    }
    false
}
