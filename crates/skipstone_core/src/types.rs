//! Core domain types shared across the geometry engine and the wire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A position on the sheet in centimeter coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    /// Distance from the left sideline.
    pub x: f64,
    /// Distance from the view origin (tee line at `VIEW_TOP_OFFSET`).
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One stone in a team's set during the placement phase.
///
/// `index` is the stable identity within the set; position is owned by
/// the placing player's client until confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Stone {
    /// Stable identity within the team's stone set.
    pub index: usize,
    /// Center X in sheet coordinates.
    pub x: f64,
    /// Center Y in sheet coordinates.
    pub y: f64,
    /// Whether the stone has been given a position this round.
    pub placed: bool,
    /// Times the stone bounced back to the tray after an invalid drop.
    /// Display-only; never consulted by the geometry.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub reset_count: u32,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl Stone {
    /// Creates an unplaced stone sitting in the tray.
    pub fn unplaced(index: usize) -> Self {
        Self {
            index,
            x: 0.0,
            y: 0.0,
            placed: false,
            reset_count: 0,
        }
    }

    /// Creates a placed stone at the given position.
    pub fn placed_at(index: usize, x: f64, y: f64) -> Self {
        Self {
            index,
            x,
            y,
            placed: true,
            reset_count: 0,
        }
    }

    /// Center position as a [`Point`].
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Team color. Both sides place blind and simultaneously; each client
/// only ever mutates its own color's set.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TeamColor {
    /// Red stones.
    Red,
    /// Yellow stones.
    Yellow,
}

impl TeamColor {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            TeamColor::Red => TeamColor::Yellow,
            TeamColor::Yellow => TeamColor::Red,
        }
    }
}

/// A circular zone where the opponent has banned placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BanZone {
    /// Center X in sheet coordinates.
    pub x: f64,
    /// Center Y in sheet coordinates.
    pub y: f64,
    /// Zone radius in centimeters.
    pub radius: f64,
}

impl BanZone {
    /// Center position as a [`Point`].
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
