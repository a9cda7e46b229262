//! Skipstone server - placement sessions and demo HTTP API
//!
//! Wraps the pure geometry in [`skipstone_core`] with the two thin I/O
//! layers the pre-placement aid needs:
//!
//! - **Session**: two-player blind placement with confirm/reveal
//! - **Api**: the collision demo endpoint and game lifecycle routes
//!
//! # Example
//!
//! ```
//! use skipstone_server::{AppState, router};
//!
//! let app = router(AppState::default());
//! # let _ = app;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod error;
mod session;

pub use api::{
    AppState, BannedZones, ConfirmRequest, ConfirmResponse, CreateGameResponse, GameViewResponse,
    JoinGameResponse, PlaceBanRequest, PlaceStoneRequest, PlaceStoneResponse, ResolveRequest,
    ResolveResponse, StonesByColor, router,
};
pub use error::ApiError;
pub use session::{
    ConfirmedStone, GameId, GameSession, PlacementOutcome, PlacementState, Player, PlayerId,
    RevealedStones, SessionError, SessionManager, STONES_PER_TEAM,
};
