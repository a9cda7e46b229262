//! Placement validation against the legal placement rectangle.
//!
//! A stone may rest anywhere between the hog line and the back line,
//! inside the sidelines. The hog line has painted width and may not be
//! touched, so the near bound measures from its bottom edge plus one
//! stone radius; a stone may hang over the back line by up to its
//! radius past the line's center.

use crate::constants::{
    BACK_LINE_OFFSET, HOG_LINE_OFFSET, HOG_LINE_WIDTH, SHEET_WIDTH, STONE_RADIUS, VIEW_TOP_OFFSET,
};
use serde::{Deserialize, Serialize};

/// The four boundaries a placement can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum Violation {
    /// X below the left sideline bound.
    #[display("Stone placement violates left sideline boundary")]
    LeftSideline,
    /// X above the right sideline bound.
    #[display("Stone placement violates right sideline boundary")]
    RightSideline,
    /// Y above the hog line bound (too far up the sheet).
    #[display("Stone placement violates hog line boundary (too far up)")]
    HogLine,
    /// Y below the back line bound (too far down the sheet).
    #[display("Stone placement violates back line boundary (too far down)")]
    BackLine,
}

/// Scalar bounds of the legal placement rectangle, plus the raw line
/// positions for callers that draw the lines or test proximity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementBoundaries {
    /// Minimum legal center X.
    pub min_x: f64,
    /// Maximum legal center X.
    pub max_x: f64,
    /// Minimum legal center Y.
    pub min_y: f64,
    /// Maximum legal center Y.
    pub max_y: f64,
    /// Y of the hog line's center.
    pub hog_line_y: f64,
    /// Y of the back line's center.
    pub back_line_y: f64,
}

/// Returns the legal placement rectangle derived from the sheet constants.
pub fn boundaries() -> PlacementBoundaries {
    let hog_line_y = VIEW_TOP_OFFSET - HOG_LINE_OFFSET;
    let back_line_y = VIEW_TOP_OFFSET + BACK_LINE_OFFSET;
    let hog_line_bottom_edge = hog_line_y + HOG_LINE_WIDTH / 2.0;

    PlacementBoundaries {
        min_x: STONE_RADIUS,
        max_x: SHEET_WIDTH - STONE_RADIUS,
        min_y: hog_line_bottom_edge + STONE_RADIUS,
        max_y: back_line_y + STONE_RADIUS,
        hog_line_y,
        back_line_y,
    }
}

/// Outcome of validating a raw drop position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    /// True iff the unclamped input satisfied all four boundaries.
    pub is_valid: bool,
    /// Input X clamped into the legal rectangle.
    pub clamped_x: f64,
    /// Input Y clamped into the legal rectangle.
    pub clamped_y: f64,
    /// Every boundary the unclamped input violated.
    pub violations: Vec<Violation>,
}

impl Validation {
    /// Clamped position as a [`Point`](crate::types::Point).
    pub fn clamped(&self) -> crate::types::Point {
        crate::types::Point::new(self.clamped_x, self.clamped_y)
    }
}

/// Validates and clamps a stone placement.
///
/// All four boundary checks run independently; multiple simultaneous
/// violations are all reported. Clamping is per-axis, so any real input
/// produces a point inside the rectangle. A point exactly on a boundary
/// is valid. Pure and idempotent: validating a clamped point reports
/// valid with unchanged coordinates.
pub fn validate(x: f64, y: f64) -> Validation {
    let bounds = boundaries();
    let mut violations = Vec::new();

    if x < bounds.min_x {
        violations.push(Violation::LeftSideline);
    }
    if x > bounds.max_x {
        violations.push(Violation::RightSideline);
    }
    if y < bounds.min_y {
        violations.push(Violation::HogLine);
    }
    if y > bounds.max_y {
        violations.push(Violation::BackLine);
    }

    Validation {
        is_valid: violations.is_empty(),
        clamped_x: x.clamp(bounds.min_x, bounds.max_x),
        clamped_y: y.clamp(bounds.min_y, bounds.max_y),
        violations,
    }
}

/// Whether a position is inside the legal placement rectangle.
pub fn is_valid_placement(x: f64, y: f64) -> bool {
    validate(x, y).is_valid
}
