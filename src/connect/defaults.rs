//! Default connector settings (all in pixels unless noted)

use crate::types::{Fraction, Px};

/// Extra outward push used only while choosing anchors
pub const TOLERANCE: Px = Px::px(20.0);
/// Gap kept between the box edge and the curve endpoint
pub const OFFSET: Px = Px::px(5.0);
/// Where along each side the first box's anchors sit
pub const START_POSITION: Fraction = Fraction::of(0.25);
/// Where along each side the second box's anchors sit
pub const END_POSITION: Fraction = Fraction::of(0.75);
pub const DIRECTED: bool = true;
/// Length the arrowhead tangent is normalised to
pub const ARROW_LENGTH: Px = Px::px(5.0);
/// Smallest distance between an endpoint and its control point
pub const MIN_BOW: Px = Px::px(10.0);
/// Decimal places kept on projected coordinates and arrowhead pixels
pub const COORD_DECIMALS: i32 = 3;
/// A curve never shrinks below start + two controls + end
pub const MIN_COMPONENTS: usize = 4;
