//! Collision resolution for stone placement.
//!
//! Not a physics simulation: stones have no velocity or curl, only
//! final rest positions. Overlaps are removed by iteratively pushing
//! stones apart along their separation vector, re-clamping into the
//! legal rectangle after every pass, under a fixed iteration budget so
//! pathological crowding terminates with a best-effort result instead
//! of looping.

use crate::bans;
use crate::constants::STONE_RADIUS;
use crate::types::{BanZone, Point, Stone};
use crate::validation::validate;
use tracing::debug;

/// Minimum legal center-to-center distance between two stones.
pub const MIN_SEPARATION: f64 = STONE_RADIUS * 2.0;

/// Passes granted per stone in the set before giving up.
const PASSES_PER_STONE: usize = 4;

/// Passes granted per stone in simultaneous resolution. The symmetric
/// half-push propagates compression through a crowd a little at a time,
/// so dense chains need far more passes than the single-stone resolver.
const SIMULTANEOUS_PASSES_PER_STONE: usize = 128;

/// Overlaps smaller than this count as resolved. Repositioning to exact
/// touch can land a hair inside [`MIN_SEPARATION`] after rounding, and
/// retriggering on that residue would keep every pass busy forever.
const SEPARATION_TOLERANCE: f64 = 1e-9;

fn iteration_cap(stone_count: usize) -> usize {
    stone_count.max(1) * PASSES_PER_STONE
}

fn overlapping(distance: f64) -> bool {
    MIN_SEPARATION - distance > SEPARATION_TOLERANCE
}

/// Separation direction from `from` toward `to`; falls back to the +X
/// unit vector when the centers coincide so the result stays
/// deterministic across peers.
fn separation_direction(from: Point, to: Point, distance: f64) -> (f64, f64) {
    if distance == 0.0 {
        (1.0, 0.0)
    } else {
        ((to.x - from.x) / distance, (to.y - from.y) / distance)
    }
}

/// Resolves the stone being placed or dragged against its own team's
/// placed stones.
///
/// Starts from the proposed position (boundary-clamped first), and in
/// each pass pushes the moving stone clear of every other placed stone
/// it overlaps, repositioning it to exactly touch along the separation
/// vector. After each pass the result is re-clamped into the placement
/// rectangle; if clamping reintroduces a collision the next pass
/// resolves it. Stops on a collision-free pass or when the iteration
/// budget runs out.
///
/// Zero other placed stones means the clamped input comes back
/// unchanged, and an already-legal proposal resolves in a single
/// clean pass.
pub fn resolve_collisions(moving_index: usize, x: f64, y: f64, stones: &[Stone]) -> Point {
    let start = validate(x, y).clamped();
    let mut resolved = start;

    for pass in 0..iteration_cap(stones.len()) {
        let mut collision_found = false;

        for other in stones {
            if other.index == moving_index || !other.placed {
                continue;
            }

            let distance = resolved.distance_to(other.position());
            if overlapping(distance) {
                collision_found = true;
                let (nx, ny) = separation_direction(other.position(), resolved, distance);
                resolved.x = other.x + nx * MIN_SEPARATION;
                resolved.y = other.y + ny * MIN_SEPARATION;
            }
        }

        resolved = validate(resolved.x, resolved.y).clamped();

        if !collision_found {
            if pass > 0 {
                debug!(moving_index, passes = pass, "separated after collision");
            }
            return resolved;
        }
    }

    debug!(moving_index, "iteration budget exhausted, accepting best effort");
    resolved
}

/// A stone taking part in simultaneous (post-reveal) resolution,
/// carrying the ban zone that restricts its color, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealedStone {
    /// Current center position; rewritten in place by the resolver.
    pub position: Point,
    /// Ban zone applying to this stone's color.
    pub ban: Option<BanZone>,
}

/// Resolves a whole revealed set at once, as the demo surface does when
/// both teams' stones land on the sheet together.
///
/// Unlike [`resolve_collisions`], where the dragged stone yields to
/// settled ones, no stone here has priority: each overlapping pair is
/// pushed apart symmetrically about its midpoint, half the overlap
/// each way. Every pass then pushes stones out of their ban zones and
/// re-clamps into the placement rectangle. Terminates on a quiet pass
/// or at the iteration budget, which is far larger than the single-stone
/// resolver's: the half-push moves compression through a dense crowd a
/// fraction at a time, and a crowd pinned against a boundary needs
/// hundreds of passes before every pair comes to rest separated.
pub fn resolve_simultaneous(stones: &mut [RevealedStone]) {
    let cap = stones.len().max(1) * SIMULTANEOUS_PASSES_PER_STONE;

    for pass in 0..cap {
        let mut adjusted = false;

        for a in 0..stones.len() {
            for b in (a + 1)..stones.len() {
                let pa = stones[a].position;
                let pb = stones[b].position;
                let distance = pa.distance_to(pb);
                if overlapping(distance) {
                    adjusted = true;
                    let (nx, ny) = separation_direction(pa, pb, distance);
                    let push = (MIN_SEPARATION - distance) / 2.0;
                    stones[a].position.x = pa.x - nx * push;
                    stones[a].position.y = pa.y - ny * push;
                    stones[b].position.x = pb.x + nx * push;
                    stones[b].position.y = pb.y + ny * push;
                }
            }
        }

        for stone in stones.iter_mut() {
            if let Some(zone) = stone.ban {
                let p = stone.position;
                if bans::overlaps_ban_zone(p.x, p.y, &zone) {
                    // A push that rounds back to the same point is rest,
                    // not progress.
                    let pushed = bans::push_out_of_ban_zone(p.x, p.y, &zone);
                    if pushed != p {
                        adjusted = true;
                        stone.position = pushed;
                    }
                }
            }
            let clamped = validate(stone.position.x, stone.position.y).clamped();
            if clamped != stone.position {
                adjusted = true;
                stone.position = clamped;
            }
        }

        if !adjusted {
            debug!(stones = stones.len(), passes = pass, "simultaneous set settled");
            return;
        }
    }

    debug!(stones = stones.len(), cap, "simultaneous resolution hit iteration budget");
}
