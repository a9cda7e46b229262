//! Zone classification: house, near-house, or guard.

use crate::constants::{HOUSE_RADIUS_12, NEAR_HOUSE_THRESHOLD, STONE_RADIUS, house_center};
use crate::types::Point;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The three strategic zones a placed stone can occupy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Zone {
    /// Touching or inside the 12 ft ring.
    House,
    /// Not touching the house, but within 1.5 m of the outer ring.
    NearHouse,
    /// Everything else between the hog line and the house.
    Guard,
}

/// Zone classification plus the distances it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ZoneReport {
    /// Which zone the stone occupies.
    pub zone: Zone,
    /// Distance from the stone center to the house center.
    pub distance_to_center: f64,
    /// Distance from the stone's edge to the outer ring: negative inside,
    /// zero at exact touch, positive fully outside.
    pub distance_to_house: f64,
    /// Whether the stone's edge touches or overlaps the outer ring.
    pub is_touching_house: bool,
}

/// Distance from a stone center to the house center (tee line midpoint).
pub fn distance_to_center(x: f64, y: f64) -> f64 {
    Point::new(x, y).distance_to(house_center())
}

/// Distance from a stone's edge to the house's outer ring.
pub fn distance_to_house(x: f64, y: f64) -> f64 {
    distance_to_center(x, y) - STONE_RADIUS - HOUSE_RADIUS_12
}

/// Whether the stone touches or sits inside the house. Exact touch counts.
pub fn is_touching_house(x: f64, y: f64) -> bool {
    distance_to_center(x, y) <= HOUSE_RADIUS_12 + STONE_RADIUS
}

/// Classifies a stone position into a zone.
///
/// Rule order, first match wins:
/// 1. touching the house -> [`Zone::House`]
/// 2. within [`NEAR_HOUSE_THRESHOLD`] of the outer ring -> [`Zone::NearHouse`]
/// 3. otherwise -> [`Zone::Guard`]
///
/// Both thresholds are non-strict, so a stone exactly on a threshold takes
/// the inner zone. Pure and deterministic; safe to call every frame.
pub fn classify(x: f64, y: f64) -> ZoneReport {
    let dist_to_center = distance_to_center(x, y);
    let dist_to_house = dist_to_center - STONE_RADIUS - HOUSE_RADIUS_12;
    let touching = dist_to_center <= HOUSE_RADIUS_12 + STONE_RADIUS;

    let zone = if touching {
        Zone::House
    } else if dist_to_center <= HOUSE_RADIUS_12 + STONE_RADIUS + NEAR_HOUSE_THRESHOLD {
        Zone::NearHouse
    } else {
        Zone::Guard
    };

    ZoneReport {
        zone,
        distance_to_center: dist_to_center,
        distance_to_house: dist_to_house,
        is_touching_house: touching,
    }
}

/// Just the zone, without the distances.
pub fn zone_of(x: f64, y: f64) -> Zone {
    classify(x, y).zone
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SHEET_WIDTH, VIEW_TOP_OFFSET};

    const CENTER_X: f64 = SHEET_WIDTH / 2.0;

    #[test]
    fn stone_at_button_is_house() {
        let report = classify(CENTER_X, VIEW_TOP_OFFSET);
        assert_eq!(report.zone, Zone::House);
        assert_eq!(report.distance_to_center, 0.0);
        assert!(report.is_touching_house);
        assert_eq!(report.distance_to_house, -STONE_RADIUS - HOUSE_RADIUS_12);
    }

    #[test]
    fn house_boundary_is_exact() {
        let touch_y = VIEW_TOP_OFFSET - (HOUSE_RADIUS_12 + STONE_RADIUS);
        let report = classify(CENTER_X, touch_y);
        assert_eq!(report.zone, Zone::House);
        assert!(report.is_touching_house);
        assert!(report.distance_to_house.abs() < 1e-9);

        let report = classify(CENTER_X, touch_y - 0.1);
        assert_eq!(report.zone, Zone::NearHouse);
        assert!(!report.is_touching_house);
    }

    #[test]
    fn near_house_boundary_is_exact() {
        let edge_y = VIEW_TOP_OFFSET - (HOUSE_RADIUS_12 + STONE_RADIUS + NEAR_HOUSE_THRESHOLD);
        assert_eq!(zone_of(CENTER_X, edge_y), Zone::NearHouse);
        assert_eq!(zone_of(CENTER_X, edge_y - 0.1), Zone::Guard);
    }

    #[test]
    fn zones_are_monotonic_moving_outward() {
        // Walk straight up the center line from the button toward the hog
        // line; the zone rank must never decrease.
        let rank = |z: Zone| match z {
            Zone::House => 0,
            Zone::NearHouse => 1,
            Zone::Guard => 2,
        };
        let mut last = 0;
        let mut y = VIEW_TOP_OFFSET;
        while y > 30.0 {
            let r = rank(zone_of(CENTER_X, y));
            assert!(r >= last, "zone went backward at y={y}");
            last = r;
            y -= 1.0;
        }
        assert_eq!(last, 2);
    }

    #[test]
    fn distance_to_house_sign_convention() {
        // Inside the house: negative. Outside: positive.
        assert!(distance_to_house(CENTER_X, VIEW_TOP_OFFSET) < 0.0);
        assert!(distance_to_house(CENTER_X, VIEW_TOP_OFFSET - 400.0) > 0.0);
    }

    #[test]
    fn zone_wire_names_are_kebab_case() {
        assert_eq!(serde_json::to_string(&Zone::NearHouse).unwrap(), "\"near-house\"");
        assert_eq!(Zone::Guard.to_string(), "guard");
        assert_eq!(Zone::House.to_string(), "house");
    }
}
