//! Placement session management for the blind phase.
//!
//! Each game holds two players who place stones without seeing the
//! opponent's sheet. A player's stones are mutable until they confirm;
//! once both sides have confirmed, the session reveals and the final
//! arrays become immutable round history.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use skipstone_core::bans;
use skipstone_core::types::{BanZone, Point, Stone, TeamColor};
use skipstone_core::validation::{boundaries, validate};
use skipstone_core::{classify, resolve_collisions};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type GameId = String;

/// Unique identifier for a player.
pub type PlayerId = String;

/// Stones granted to each team per round.
pub const STONES_PER_TEAM: usize = 8;

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// Both colors are already taken.
    #[display("Game already has 2 players")]
    GameFull,
    /// No such game.
    #[display("Game not found")]
    GameNotFound,
    /// The player is not part of this game.
    #[display("Player not found in game")]
    PlayerNotFound,
    /// Stone index outside the team's set.
    #[display("Stone index out of range")]
    StoneOutOfRange,
    /// Ban zone radius or center that can't sit on the sheet.
    #[display("Ban zone does not fit on the sheet")]
    BanZoneDoesNotFit,
    /// The player already confirmed; their stones are locked.
    #[display("Placement already confirmed")]
    AlreadyConfirmed,
}

impl std::error::Error for SessionError {}

/// A player in a placement session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    /// Player's unique ID.
    pub id: PlayerId,
    /// Which color this player throws.
    pub color: TeamColor,
}

/// One team's placement state during the blind phase.
#[derive(Debug, Clone)]
pub struct PlacementState {
    /// The team's stone set; unplaced stones sit in the tray.
    pub stones: Vec<Stone>,
    /// Whether this side has locked in their placement.
    pub confirmed: bool,
}

impl PlacementState {
    fn new() -> Self {
        Self {
            stones: (0..STONES_PER_TEAM).map(Stone::unplaced).collect(),
            confirmed: false,
        }
    }
}

/// Result of a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct PlacementOutcome {
    /// Final stone state after clamping, ban adjustment, and collision
    /// resolution.
    pub stone: Stone,
    /// The drop was swallowed by a ban zone and the stone went back to
    /// the tray.
    pub reset_to_bar: bool,
    /// Whether the ban zone pushed the stone to its edge.
    pub pushed_by_ban: bool,
}

/// Final positions exchanged once both sides confirm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RevealedStones {
    /// Red's placed stones as `{index, x, y}` entries.
    pub red: Vec<ConfirmedStone>,
    /// Yellow's placed stones.
    pub yellow: Vec<ConfirmedStone>,
}

/// One confirmed stone on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfirmedStone {
    /// Identity within the team's set.
    pub index: usize,
    /// Center X in sheet coordinates.
    pub x: f64,
    /// Center Y in sheet coordinates.
    pub y: f64,
}

/// A blind-placement game between two players.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: GameId,
    /// Red player, assigned first.
    pub red: Option<Player>,
    /// Yellow player, assigned second.
    pub yellow: Option<Player>,
    /// Red's placement state.
    pub red_placement: PlacementState,
    /// Yellow's placement state.
    pub yellow_placement: PlacementState,
    /// Ban zones keyed by the color they restrict.
    pub bans: HashMap<TeamColor, BanZone>,
}

impl GameSession {
    /// Creates an empty session.
    #[instrument]
    pub fn new(id: GameId) -> Self {
        info!(game_id = %id, "Creating new placement session");
        Self {
            id,
            red: None,
            yellow: None,
            red_placement: PlacementState::new(),
            yellow_placement: PlacementState::new(),
            bans: HashMap::new(),
        }
    }

    /// Joins the next free color. Red fills first, then yellow; a third
    /// join is rejected.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn join(&mut self, player_id: PlayerId) -> Result<Player, SessionError> {
        let color = if self.red.is_none() {
            TeamColor::Red
        } else if self.yellow.is_none() {
            TeamColor::Yellow
        } else {
            warn!(player_id = %player_id, "Game already has 2 players");
            return Err(SessionError::GameFull);
        };

        info!(player_id = %player_id, %color, "Player joined");
        let player = Player {
            id: player_id,
            color,
        };
        match color {
            TeamColor::Red => self.red = Some(player.clone()),
            TeamColor::Yellow => self.yellow = Some(player.clone()),
        }
        Ok(player)
    }

    /// Looks up a player by ID.
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        [self.red.as_ref(), self.yellow.as_ref()]
            .into_iter()
            .flatten()
            .find(|p| p.id == player_id)
    }

    fn placement(&self, color: TeamColor) -> &PlacementState {
        match color {
            TeamColor::Red => &self.red_placement,
            TeamColor::Yellow => &self.yellow_placement,
        }
    }

    fn placement_mut(&mut self, color: TeamColor) -> &mut PlacementState {
        match color {
            TeamColor::Red => &mut self.red_placement,
            TeamColor::Yellow => &mut self.yellow_placement,
        }
    }

    /// Places or moves one of a player's stones.
    ///
    /// The raw drop is boundary-clamped, adjusted against the ban zone
    /// restricting the player's color, then collision-resolved against
    /// that player's own placed stones only — the opponent's stones are
    /// invisible during the blind phase and never participate.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn place_stone(
        &mut self,
        player_id: &str,
        index: usize,
        x: f64,
        y: f64,
    ) -> Result<PlacementOutcome, SessionError> {
        let color = self
            .player(player_id)
            .ok_or(SessionError::PlayerNotFound)?
            .color;
        if self.placement(color).confirmed {
            return Err(SessionError::AlreadyConfirmed);
        }
        if index >= self.placement(color).stones.len() {
            return Err(SessionError::StoneOutOfRange);
        }

        let clamped = validate(x, y).clamped();
        let ban = self.bans.get(&color).copied();
        let adjustment = bans::adjust_for_ban_zone(clamped.x, clamped.y, ban.as_ref());

        let state = self.placement_mut(color);
        if adjustment.reset_to_bar {
            let stone = &mut state.stones[index];
            stone.placed = false;
            stone.reset_count += 1;
            debug!(index, "Drop landed in ban zone, stone returned to tray");
            return Ok(PlacementOutcome {
                stone: *stone,
                reset_to_bar: true,
                pushed_by_ban: false,
            });
        }

        let rest = resolve_collisions(index, adjustment.position.x, adjustment.position.y, &state.stones);
        let stone = &mut state.stones[index];
        stone.x = rest.x;
        stone.y = rest.y;
        stone.placed = true;

        debug!(
            index,
            x = rest.x,
            y = rest.y,
            zone = %classify(rest.x, rest.y).zone,
            "Stone placed"
        );
        Ok(PlacementOutcome {
            stone: *stone,
            reset_to_bar: false,
            pushed_by_ban: adjustment.pushed,
        })
    }

    /// Returns a stone to the tray, e.g. after a drag was cancelled by
    /// dropping outside the sheet. No collision resolution runs.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn return_to_bar(&mut self, player_id: &str, index: usize) -> Result<Stone, SessionError> {
        let color = self
            .player(player_id)
            .ok_or(SessionError::PlayerNotFound)?
            .color;
        if self.placement(color).confirmed {
            return Err(SessionError::AlreadyConfirmed);
        }
        let state = self.placement_mut(color);
        let stone = state
            .stones
            .get_mut(index)
            .ok_or(SessionError::StoneOutOfRange)?;
        stone.placed = false;
        stone.reset_count += 1;
        Ok(*stone)
    }

    /// Places a ban zone restricting the opponent's placements. The
    /// zone center is clamped so the whole circle stays on the
    /// playable sheet; a radius the sheet can't contain (or a
    /// non-finite input) is rejected rather than clamped, since the
    /// clamp bounds would cross.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn place_ban(
        &mut self,
        player_id: &str,
        x: f64,
        y: f64,
        radius: f64,
    ) -> Result<BanZone, SessionError> {
        let placer = self
            .player(player_id)
            .ok_or(SessionError::PlayerNotFound)?
            .color;

        let b = boundaries();
        let hog_line_bottom_edge = b.min_y - skipstone_core::constants::STONE_RADIUS;
        let max_radius = (skipstone_core::constants::SHEET_WIDTH / 2.0)
            .min((b.back_line_y - hog_line_bottom_edge) / 2.0);
        if !x.is_finite() || !y.is_finite() || !(radius > 0.0 && radius <= max_radius) {
            warn!(x, y, radius, "Ban zone does not fit on the sheet");
            return Err(SessionError::BanZoneDoesNotFit);
        }

        let zone = BanZone {
            x: x.clamp(radius, skipstone_core::constants::SHEET_WIDTH - radius),
            y: y.clamp(hog_line_bottom_edge + radius, b.back_line_y - radius),
            radius,
        };

        let restricted = placer.opponent();
        info!(%restricted, zone.x, zone.y, zone.radius, "Ban zone placed");
        self.bans.insert(restricted, zone);
        Ok(zone)
    }

    /// Locks in the player's placement. Returns the revealed arrays if
    /// this confirmation completed the round.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn confirm(&mut self, player_id: &str) -> Result<Option<RevealedStones>, SessionError> {
        let color = self
            .player(player_id)
            .ok_or(SessionError::PlayerNotFound)?
            .color;
        let state = self.placement_mut(color);
        if state.confirmed {
            return Err(SessionError::AlreadyConfirmed);
        }
        state.confirmed = true;
        info!(%color, "Placement confirmed");

        Ok(self.revealed())
    }

    /// Whether both sides have confirmed.
    pub fn is_revealed(&self) -> bool {
        self.red_placement.confirmed && self.yellow_placement.confirmed
    }

    /// Final stone arrays, available only after both confirmations.
    pub fn revealed(&self) -> Option<RevealedStones> {
        if !self.is_revealed() {
            return None;
        }
        let collect = |state: &PlacementState| {
            state
                .stones
                .iter()
                .filter(|s| s.placed)
                .map(|s| ConfirmedStone {
                    index: s.index,
                    x: s.x,
                    y: s.y,
                })
                .collect()
        };
        Some(RevealedStones {
            red: collect(&self.red_placement),
            yellow: collect(&self.yellow_placement),
        })
    }

    /// Positions of a color's placed stones.
    pub fn placed_points(&self, color: TeamColor) -> Vec<Point> {
        self.placement(color)
            .stones
            .iter()
            .filter(|s| s.placed)
            .map(Stone::position)
            .collect()
    }
}

/// Thread-safe registry of active sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    games: Arc<Mutex<HashMap<GameId, GameSession>>>,
}

impl SessionManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with a generated ID.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> GameId {
        let id = uuid::Uuid::new_v4().to_string();
        let mut games = self.games.lock().expect("session lock poisoned");
        games.insert(id.clone(), GameSession::new(id.clone()));
        id
    }

    /// Runs a closure against a game under the registry lock.
    pub fn with_game<R>(
        &self,
        game_id: &str,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> Result<R, SessionError> {
        let mut games = self.games.lock().expect("session lock poisoned");
        let game = games.get_mut(game_id).ok_or(SessionError::GameNotFound)?;
        Ok(f(game))
    }

    /// Snapshot of a game's state.
    pub fn get_game(&self, game_id: &str) -> Option<GameSession> {
        let games = self.games.lock().expect("session lock poisoned");
        games.get(game_id).cloned()
    }
}
