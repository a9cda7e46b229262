//! Ban zone checks and push-out.
//!
//! The opponent may mark a circular zone where the player's stones can't
//! rest. A stone clipping the edge gets pushed out to just touch; a
//! stone swallowed whole goes back to the tray.

use crate::constants::STONE_RADIUS;
use crate::types::{BanZone, Point};
use crate::validation::is_valid_placement;
use serde::{Deserialize, Serialize};

/// Whether the stone touches or intersects the ban zone.
pub fn overlaps_ban_zone(x: f64, y: f64, zone: &BanZone) -> bool {
    Point::new(x, y).distance_to(zone.center()) < STONE_RADIUS + zone.radius
}

/// Whether no part of the stone is outside the ban zone.
pub fn fully_inside_ban_zone(x: f64, y: f64, zone: &BanZone) -> bool {
    Point::new(x, y).distance_to(zone.center()) + STONE_RADIUS <= zone.radius
}

/// Pushes a stone out of the ban zone to just touch its edge, along the
/// center-to-stone direction. A stone exactly on the zone center is
/// pushed straight up the sheet (-Y) so the result stays deterministic.
/// Not overlapping means the input comes back unchanged.
pub fn push_out_of_ban_zone(x: f64, y: f64, zone: &BanZone) -> Point {
    let stone = Point::new(x, y);
    let distance = stone.distance_to(zone.center());

    if distance >= STONE_RADIUS + zone.radius {
        return stone;
    }

    let (nx, ny) = if distance == 0.0 {
        (0.0, -1.0)
    } else {
        ((x - zone.x) / distance, (y - zone.y) / distance)
    };

    let new_distance = zone.radius + STONE_RADIUS;
    Point::new(zone.x + nx * new_distance, zone.y + ny * new_distance)
}

/// What to do with a stone dropped on or near a ban zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BanAdjustment {
    /// The stone was pushed to the zone's edge.
    pub pushed: bool,
    /// The drop is unusable; the stone goes back to the tray.
    pub reset_to_bar: bool,
    /// Position to use when the stone stays on the sheet.
    pub position: Point,
}

/// Decides how a ban zone affects a dropped stone.
///
/// Fully inside the zone resets to the tray; partially inside pushes to
/// the edge unless the pushed position leaves the legal rectangle, which
/// also resets; clear of the zone leaves the drop untouched.
pub fn adjust_for_ban_zone(x: f64, y: f64, zone: Option<&BanZone>) -> BanAdjustment {
    let position = Point::new(x, y);
    let Some(zone) = zone else {
        return BanAdjustment {
            pushed: false,
            reset_to_bar: false,
            position,
        };
    };

    if fully_inside_ban_zone(x, y, zone) {
        return BanAdjustment {
            pushed: false,
            reset_to_bar: true,
            position,
        };
    }

    if overlaps_ban_zone(x, y, zone) {
        let pushed_to = push_out_of_ban_zone(x, y, zone);
        if !is_valid_placement(pushed_to.x, pushed_to.y) {
            return BanAdjustment {
                pushed: false,
                reset_to_bar: true,
                position,
            };
        }
        return BanAdjustment {
            pushed: true,
            reset_to_bar: false,
            position: pushed_to,
        };
    }

    BanAdjustment {
        pushed: false,
        reset_to_bar: false,
        position,
    }
}
