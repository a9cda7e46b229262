//! Pointer gesture state machine for stone dragging.
//!
//! Not every pointer-down is a drag: a press starts out pending (this
//! could still be a tap) and is promoted to a drag either by moving far
//! enough or by holding long enough. Picking up an existing stone
//! promotes on the first real movement; a freshly placed stone waits a
//! beat so the placing tap doesn't smear the stone across the sheet.
//!
//! The machine is pure: callers feed it pointer events stamped with an
//! [`Instant`] and schedule their own long-press timer, so it can be
//! driven identically by a UI loop or a test.

use crate::types::Point;
use std::time::{Duration, Instant};

/// Movement (in input units) past which a pending press becomes a drag.
pub const DRAG_DISTANCE_THRESHOLD: f64 = 5.0;
/// Hold time after which a pending press becomes a drag without moving.
pub const LONG_PRESS: Duration = Duration::from_millis(300);
/// Delay before movement may promote a freshly placed stone.
pub const PLACEMENT_DRAG_DELAY: Duration = Duration::from_millis(200);

/// How the press began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSource {
    /// Pressing an already-placed stone.
    Pickup,
    /// The press that just placed a new stone.
    Placement,
}

/// What a completed gesture turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    /// Released without ever promoting: a tap.
    Tap {
        /// Stone the tap landed on.
        stone_index: usize,
    },
    /// Released mid-drag; the caller finalizes the drop.
    Drop {
        /// Stone that was being dragged.
        stone_index: usize,
    },
    /// Nothing was in flight.
    Idle,
}

/// Gesture state for one pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// No press in flight.
    Idle,
    /// Pressed, not yet known to be a drag.
    Pending {
        /// Stone under the press.
        stone_index: usize,
        /// Where the press started.
        origin: Point,
        /// When the press started.
        started_at: Instant,
        /// Whether the press picked up or placed the stone.
        source: GestureSource,
    },
    /// Actively dragging a stone.
    Dragging {
        /// Stone being dragged.
        stone_index: usize,
    },
}

impl Gesture {
    /// Starts a press over the given stone. Any in-flight gesture is
    /// replaced; a drag can't straddle two presses.
    pub fn press(&mut self, stone_index: usize, origin: Point, source: GestureSource, now: Instant) {
        *self = Gesture::Pending {
            stone_index,
            origin,
            started_at: now,
            source,
        };
    }

    /// Feeds a pointer movement. Returns the index of the stone being
    /// dragged when the machine is (now) dragging, so the caller knows
    /// to move the stone.
    pub fn movement(&mut self, position: Point, now: Instant) -> Option<usize> {
        match *self {
            Gesture::Idle => None,
            Gesture::Dragging { stone_index } => Some(stone_index),
            Gesture::Pending {
                stone_index,
                origin,
                started_at,
                source,
            } => {
                let moved = origin.distance_to(position);
                let elapsed = now.duration_since(started_at);
                let promote = moved > DRAG_DISTANCE_THRESHOLD
                    && (source == GestureSource::Pickup || elapsed > PLACEMENT_DRAG_DELAY);
                if promote {
                    *self = Gesture::Dragging { stone_index };
                    Some(stone_index)
                } else {
                    None
                }
            }
        }
    }

    /// Fires the long-press timer the caller scheduled at press time.
    /// Promotes to dragging if the press is still pending and the hold
    /// threshold has passed; stale timers are ignored.
    pub fn long_press_fired(&mut self, now: Instant) -> Option<usize> {
        if let Gesture::Pending {
            stone_index,
            started_at,
            ..
        } = *self
        {
            if now.duration_since(started_at) >= LONG_PRESS {
                *self = Gesture::Dragging { stone_index };
                return Some(stone_index);
            }
        }
        None
    }

    /// Releases the pointer, returning what the gesture was and
    /// resetting to idle. A drop outside the sheet is the caller's cue
    /// to revert the stone to the tray without resolving collisions.
    pub fn release(&mut self) -> GestureEnd {
        let end = match *self {
            Gesture::Idle => GestureEnd::Idle,
            Gesture::Pending { stone_index, .. } => GestureEnd::Tap { stone_index },
            Gesture::Dragging { stone_index } => GestureEnd::Drop { stone_index },
        };
        *self = Gesture::Idle;
        end
    }

    /// Whether a drag is in flight.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }
}
