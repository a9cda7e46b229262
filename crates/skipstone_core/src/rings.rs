//! Closest scoring ring and overlap measurement.
//!
//! Feedback is continuous and monotonic as a stone approaches, touches,
//! and crosses a ring edge, so the presentation layer can say things
//! like "73% over the 8 ft line".

use crate::constants::{
    BUTTON_RADIUS, HOUSE_RADIUS_4, HOUSE_RADIUS_8, HOUSE_RADIUS_12, STONE_RADIUS,
};
use crate::zones::distance_to_center;
use serde::{Deserialize, Serialize};

/// Candidate rings, scanned outermost first; ties keep the earlier ring.
const RING_RADII: [f64; 4] = [HOUSE_RADIUS_12, HOUSE_RADIUS_8, HOUSE_RADIUS_4, BUTTON_RADIUS];

/// Nearest scoring ring to a stone and how far over it the stone sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingDistance {
    /// Radius of the ring whose edge is nearest the stone's edge.
    pub closest_ring_radius: f64,
    /// Signed distance from the stone's edge to that ring's edge;
    /// negative means overlap.
    pub distance_to_ring_edge: f64,
    /// Whether the stone overlaps the ring (or covers the button).
    pub is_overlapping: bool,
    /// 0 at first touch, 100 once fully committed past the line
    /// (or at dead center for the button).
    pub overlap_percentage: u32,
}

/// Finds the scoring ring whose edge the stone's edge is nearest to.
///
/// For each ring `r` the edge distance is `|d - r| - STONE_RADIUS` where
/// `d` is the stone center's distance to the house center; the ring
/// minimizing the absolute edge distance wins, which is not necessarily
/// the smallest or largest ring.
///
/// The button is special-cased: a stone whose center is within
/// `BUTTON_RADIUS + STONE_RADIUS` of the house center reads as button
/// coverage (100% at dead center, 0% where the edges first touch)
/// rather than a partial ring measurement.
pub fn closest_ring(x: f64, y: f64) -> RingDistance {
    let dist_to_center = distance_to_center(x, y);

    let mut min_edge_dist = f64::INFINITY;
    let mut closest_radius = 0.0;
    for r in RING_RADII {
        let edge_dist = (dist_to_center - r).abs() - STONE_RADIUS;
        if edge_dist.abs() < min_edge_dist.abs() {
            min_edge_dist = edge_dist;
            closest_radius = r;
        }
    }

    let button_overlap =
        closest_radius == BUTTON_RADIUS && dist_to_center <= BUTTON_RADIUS + STONE_RADIUS;
    let is_overlapping = min_edge_dist < 0.0 || button_overlap;

    let overlap_percentage = if button_overlap {
        let max_dist = BUTTON_RADIUS + STONE_RADIUS;
        let pct = ((1.0 - dist_to_center / max_dist) * 100.0).round();
        pct.clamp(0.0, 100.0) as u32
    } else if min_edge_dist < 0.0 {
        let pct = (min_edge_dist.abs() / STONE_RADIUS * 100.0).round();
        pct.min(100.0) as u32
    } else {
        0
    };

    RingDistance {
        closest_ring_radius: closest_radius,
        distance_to_ring_edge: min_edge_dist,
        is_overlapping,
        overlap_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SHEET_WIDTH, VIEW_TOP_OFFSET};

    const CENTER_X: f64 = SHEET_WIDTH / 2.0;

    #[test]
    fn dead_center_reads_full_button() {
        let result = closest_ring(CENTER_X, VIEW_TOP_OFFSET);
        assert_eq!(result.closest_ring_radius, BUTTON_RADIUS);
        assert!(result.is_overlapping);
        assert_eq!(result.overlap_percentage, 100);
    }

    #[test]
    fn button_percentage_fades_to_zero_at_edge_touch() {
        // Stone center exactly where its edge first touches the button edge.
        let d = BUTTON_RADIUS + STONE_RADIUS;
        let result = closest_ring(CENTER_X, VIEW_TOP_OFFSET - d);
        assert_eq!(result.closest_ring_radius, BUTTON_RADIUS);
        assert!(result.is_overlapping);
        assert_eq!(result.overlap_percentage, 0);
    }

    #[test]
    fn stone_far_from_any_ring_does_not_overlap() {
        // Midway between the 4 ft and 8 ft rings, clear of both edges.
        let d = (HOUSE_RADIUS_4 + HOUSE_RADIUS_8) / 2.0;
        let result = closest_ring(CENTER_X, VIEW_TOP_OFFSET - d);
        assert!(!result.is_overlapping);
        assert_eq!(result.overlap_percentage, 0);
        assert!(result.distance_to_ring_edge > 0.0);
    }

    #[test]
    fn ring_overlap_scales_with_penetration() {
        // Stone edge just touching the 8 ft ring from outside.
        let touch = HOUSE_RADIUS_8 + STONE_RADIUS;
        let result = closest_ring(CENTER_X, VIEW_TOP_OFFSET - touch);
        assert_eq!(result.closest_ring_radius, HOUSE_RADIUS_8);
        assert_eq!(result.overlap_percentage, 0);

        // Half a stone radius past the line.
        let result = closest_ring(CENTER_X, VIEW_TOP_OFFSET - (touch - STONE_RADIUS / 2.0));
        assert!(result.is_overlapping);
        assert_eq!(result.overlap_percentage, 50);

        // A full stone radius past: centered on the line, fully committed.
        let result = closest_ring(CENTER_X, VIEW_TOP_OFFSET - HOUSE_RADIUS_8);
        assert!(result.is_overlapping);
        assert_eq!(result.overlap_percentage, 100);
    }

    #[test]
    fn overlap_percentage_is_monotonic_approaching_a_ring() {
        // March from just touching the 12 ft ring toward it; the reading
        // must never decrease.
        let mut last = 0;
        let start = HOUSE_RADIUS_12 + STONE_RADIUS;
        let mut d = start;
        while d >= HOUSE_RADIUS_12 {
            let result = closest_ring(CENTER_X, VIEW_TOP_OFFSET - d);
            assert!(result.overlap_percentage >= last, "regressed at d={d}");
            last = result.overlap_percentage;
            d -= 0.25;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn selects_nearest_edge_not_smallest_ring() {
        // Just inside the 12 ft ring: that edge is far nearer than the 8 ft.
        let d = HOUSE_RADIUS_12 - 5.0;
        let result = closest_ring(CENTER_X, VIEW_TOP_OFFSET - d);
        assert_eq!(result.closest_ring_radius, HOUSE_RADIUS_12);
    }
}
