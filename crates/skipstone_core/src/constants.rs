//! Canonical sheet, house, and stone dimensions.
//!
//! All values are centimeters in a single logical coordinate system:
//! X runs across the sheet in `[0, SHEET_WIDTH]`, Y runs down the view
//! with the tee line at [`VIEW_TOP_OFFSET`]. These never change at
//! runtime; pixel scaling is the rendering layer's problem.

use crate::types::Point;

/// Maximum sheet width (approx 15 ft 7 in).
pub const SHEET_WIDTH: f64 = 475.0;
/// Total sheet length (approx 146 ft).
pub const SHEET_LENGTH: f64 = 4450.0;

/// Outer ring radius, 6 ft (12 ft diameter).
pub const HOUSE_RADIUS_12: f64 = 183.0;
/// 8 ft ring radius.
pub const HOUSE_RADIUS_8: f64 = 122.0;
/// 4 ft ring radius.
pub const HOUSE_RADIUS_4: f64 = 61.0;
/// Button radius, approx 6 in.
pub const BUTTON_RADIUS: f64 = 15.0;

/// Hog line distance from the tee line (21 ft).
pub const HOG_LINE_OFFSET: f64 = 640.0;
/// Back line distance from the tee line (6 ft).
pub const BACK_LINE_OFFSET: f64 = 183.0;
/// Hack distance from the tee line (approx 12 ft).
pub const HACK_OFFSET: f64 = 366.0;
/// Painted width of the hog line (4 in). Stones may not touch the line,
/// so placement bounds measure from its bottom edge.
pub const HOG_LINE_WIDTH: f64 = 10.16;

/// Band beyond the outer ring that still counts as "near house" (1.5 m).
pub const NEAR_HOUSE_THRESHOLD: f64 = 150.0;

/// Stone radius (approx 11.4 in diameter).
pub const STONE_RADIUS: f64 = 14.5;

/// Y coordinate of the tee line in view coordinates. The view starts at
/// the hog line, so the tee line sits one hog offset down.
pub const VIEW_TOP_OFFSET: f64 = HOG_LINE_OFFSET;
/// View extent below the tee line: back line plus one stone diameter.
pub const VIEW_BOTTOM_OFFSET: f64 = BACK_LINE_OFFSET + STONE_RADIUS * 2.0;

/// Center of the house: sheet midline on the tee line.
pub fn house_center() -> Point {
    Point {
        x: SHEET_WIDTH / 2.0,
        y: VIEW_TOP_OFFSET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_are_strictly_nested() {
        assert!(BUTTON_RADIUS < HOUSE_RADIUS_4);
        assert!(HOUSE_RADIUS_4 < HOUSE_RADIUS_8);
        assert!(HOUSE_RADIUS_8 < HOUSE_RADIUS_12);
    }

    #[test]
    fn house_center_sits_on_tee_line() {
        let c = house_center();
        assert_eq!(c.x, SHEET_WIDTH / 2.0);
        assert_eq!(c.y, VIEW_TOP_OFFSET);
    }
}
