//! Measurement support for the presentation layer.
//!
//! The geometry core always hands out raw centimeters; everything here
//! is about turning those into the lines and labels a player sees.
//! Display preferences arrive as an explicit [`MeasurementConfig`] /
//! unit arguments — the geometry functions never read configuration.

use crate::constants::STONE_RADIUS;
use crate::types::Point;
use crate::zones::{Zone, distance_to_house};
use serde::{Deserialize, Serialize};

/// Length of a broom, used as a folksy unit (1.2 m).
const BROOM_LENGTH: f64 = 120.0;

/// Distance from a stone center to the tee line, in cm.
pub fn distance_to_tee_line(y: f64) -> f64 {
    (y - crate::constants::VIEW_TOP_OFFSET).abs()
}

/// Distance from a stone center to the center line, in cm.
pub fn distance_to_center_line(x: f64) -> f64 {
    (x - crate::constants::SHEET_WIDTH / 2.0).abs()
}

/// Center-to-center distance between two stones, in cm.
pub fn stone_to_stone(a: Point, b: Point) -> f64 {
    a.distance_to(b)
}

/// Distance from a guard's edge to the house's outer edge, in cm.
pub fn guard_distance(x: f64, y: f64) -> f64 {
    distance_to_house(x, y)
}

/// One kind of on-sheet measurement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MeasurementType {
    /// Guard distance to the house edge.
    Guard,
    /// Distance to the tee line.
    TLine,
    /// Distance to the center line.
    CenterLine,
    /// Nearest scoring ring and overlap.
    ClosestRing,
    /// Distance to another stone.
    StoneToStone,
}

/// One step in a zone's measurement cycle: the measurements shown
/// together before the player taps through to the next step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementStep {
    /// Stable step identity.
    pub id: String,
    /// Measurements rendered during this step.
    pub types: Vec<MeasurementType>,
}

impl MeasurementStep {
    /// Creates a step.
    pub fn new(id: impl Into<String>, types: Vec<MeasurementType>) -> Self {
        Self {
            id: id.into(),
            types,
        }
    }
}

/// Per-zone measurement cycles, passed into the presentation layer by
/// value instead of living in ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementConfig {
    /// Steps cycled for stones in the guard zone.
    pub guard_zone: Vec<MeasurementStep>,
    /// Steps cycled for stones in the house.
    pub house_zone: Vec<MeasurementStep>,
    /// Steps cycled for stones near the house.
    pub near_house_zone: Vec<MeasurementStep>,
}

impl MeasurementConfig {
    /// Steps configured for the given zone.
    pub fn steps_for(&self, zone: Zone) -> &[MeasurementStep] {
        match zone {
            Zone::Guard => &self.guard_zone,
            Zone::House => &self.house_zone,
            Zone::NearHouse => &self.near_house_zone,
        }
    }
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            guard_zone: vec![
                MeasurementStep::new("guard", vec![MeasurementType::Guard]),
                MeasurementStep::new(
                    "lines",
                    vec![MeasurementType::TLine, MeasurementType::CenterLine],
                ),
            ],
            house_zone: vec![
                MeasurementStep::new("ring", vec![MeasurementType::ClosestRing]),
                MeasurementStep::new(
                    "lines",
                    vec![MeasurementType::TLine, MeasurementType::CenterLine],
                ),
            ],
            near_house_zone: vec![MeasurementStep::new(
                "ring",
                vec![MeasurementType::ClosestRing],
            )],
        }
    }
}

/// Base unit system for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseUnit {
    /// Rounded centimeters.
    Metric,
    /// Feet and inches.
    Imperial,
}

/// How distances are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Always metric.
    Metric,
    /// Always imperial.
    Imperial,
    /// Distance-dependent rules (see [`SmartUnitRule`]).
    Smart,
}

/// Unit applied by a single smart-unit rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmartUnit {
    /// Rounded centimeters.
    Metric,
    /// Feet and inches.
    Imperial,
    /// Multiples of a stone diameter.
    Stone,
    /// Multiples of a broom length.
    Broom,
}

/// One band of the smart-unit table: distances up to `max_distance`
/// (cm) render in `unit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmartUnitRule {
    /// Upper bound of the band in cm; `f64::INFINITY` for the last band.
    pub max_distance: f64,
    /// Unit used inside the band.
    pub unit: SmartUnit,
}

/// The stock smart-unit table: tape-measure units up close, broom
/// lengths mid-range, meters beyond.
pub fn default_smart_units() -> Vec<SmartUnitRule> {
    vec![
        SmartUnitRule {
            max_distance: 30.48,
            unit: SmartUnit::Imperial,
        },
        SmartUnitRule {
            max_distance: 60.96,
            unit: SmartUnit::Stone,
        },
        SmartUnitRule {
            max_distance: 150.0,
            unit: SmartUnit::Imperial,
        },
        SmartUnitRule {
            max_distance: 300.0,
            unit: SmartUnit::Broom,
        },
        SmartUnitRule {
            max_distance: f64::INFINITY,
            unit: SmartUnit::Metric,
        },
    ]
}

fn format_metric(cm: f64) -> String {
    format!("{}cm", cm.round() as i64)
}

fn format_imperial(cm: f64) -> String {
    let inches = cm / 2.54;
    let feet = (inches / 12.0).floor() as i64;
    let remaining = (inches % 12.0).round() as i64;
    if feet > 0 {
        format!("{feet}'{remaining}\"")
    } else {
        format!("{remaining}\"")
    }
}

/// Formats a centimeter distance for display.
///
/// Under [`UnitSystem::Smart`] the first rule whose band contains the
/// distance wins; without a matching rule (or under a fixed system) the
/// base unit applies.
pub fn format_distance(
    cm: f64,
    system: UnitSystem,
    base: BaseUnit,
    rules: &[SmartUnitRule],
) -> String {
    if system == UnitSystem::Smart {
        if let Some(rule) = rules.iter().find(|r| cm <= r.max_distance) {
            return match rule.unit {
                SmartUnit::Metric => format_metric(cm),
                SmartUnit::Imperial => format_imperial(cm),
                SmartUnit::Stone => format!("{:.1} stones", cm / (STONE_RADIUS * 2.0)),
                SmartUnit::Broom => format!("{:.1} brooms", cm / BROOM_LENGTH),
            };
        }
    }

    match (system, base) {
        (UnitSystem::Imperial, _) | (_, BaseUnit::Imperial) => format_imperial(cm),
        _ => format_metric(cm),
    }
}
