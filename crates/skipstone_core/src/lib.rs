//! Skipstone core - curling sheet geometry
//!
//! Pure placement geometry for a digital pre-placement aid: players
//! position stones on a virtual sheet before touching real granite.
//!
//! # Architecture
//!
//! - **Validation**: clamp raw drop coordinates into the legal rectangle
//! - **Collision**: de-overlap against already-placed stones
//! - **Zones / Rings**: classify stored positions for strategic feedback
//! - **Measure**: raw-centimeter measurements plus display formatting
//!
//! Data flows raw pointer coordinates -> [`validation::validate`] ->
//! [`collision::resolve_collisions`] -> stored position, with
//! [`zones::classify`] and [`rings::closest_ring`] consumed on demand.
//! Everything is synchronous, pure, and total over f64 inputs: out of
//! range coordinates are reported and clamped, never panicked on.
//!
//! # Example
//!
//! ```
//! use skipstone_core::{collision, types::Stone, validation, zones};
//!
//! let placed = vec![Stone::placed_at(0, 237.0, 640.0)];
//! let drop = validation::validate(245.0, 640.0);
//! assert!(drop.is_valid);
//!
//! let rest = collision::resolve_collisions(1, drop.clamped_x, drop.clamped_y, &placed);
//! assert_eq!(zones::classify(rest.x, rest.y).zone, zones::Zone::House);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bans;
pub mod collision;
pub mod constants;
pub mod gesture;
pub mod measure;
pub mod rings;
pub mod types;
pub mod validation;
pub mod zones;

pub use bans::{BanAdjustment, adjust_for_ban_zone};
pub use collision::{MIN_SEPARATION, RevealedStone, resolve_collisions, resolve_simultaneous};
pub use rings::{RingDistance, closest_ring};
pub use types::{BanZone, Point, Stone, TeamColor};
pub use validation::{PlacementBoundaries, Validation, Violation, boundaries, validate};
pub use zones::{Zone, ZoneReport, classify};
