//! HTTP API: collision demo endpoint and game lifecycle routes.
//!
//! All positions on the wire are `{x, y}` pairs in centimeter sheet
//! coordinates, grouped by team color.

use crate::error::ApiError;
use crate::session::{
    ConfirmedStone, PlacementOutcome, RevealedStones, SessionManager,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use skipstone_core::types::{BanZone, Point, TeamColor};
use skipstone_core::zones::ZoneReport;
use skipstone_core::{RevealedStone, classify, resolve_simultaneous};
use tracing::{info, instrument};

/// Shared state handed to every handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Active placement sessions.
    pub sessions: SessionManager,
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/collisions/resolve", post(resolve))
        .route("/api/games", post(create_game))
        .route("/api/games/{id}/join", post(join_game))
        .route("/api/games/{id}/stones", post(place_stone))
        .route("/api/games/{id}/bans", post(place_ban))
        .route("/api/games/{id}/confirm", post(confirm))
        .route("/api/games/{id}", get(get_game))
        .with_state(state)
}

// Request/Response types

/// Stone positions grouped by color.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StonesByColor {
    /// Red stones in placement order.
    #[serde(default)]
    pub red: Vec<Point>,
    /// Yellow stones in placement order.
    #[serde(default)]
    pub yellow: Vec<Point>,
}

/// Ban zones keyed by the color they restrict.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct BannedZones {
    /// Zone restricting red.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<BanZone>,
    /// Zone restricting yellow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yellow: Option<BanZone>,
}

/// Request for resolving a revealed set of stones.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ResolveRequest {
    /// Both teams' stones.
    pub stones: StonesByColor,
    /// Active ban zones.
    #[serde(default)]
    pub banned_zones: BannedZones,
}

/// Response with the de-overlapped positions.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ResolveResponse {
    /// Final non-overlapping positions, same order as the request.
    pub resolved_stones: StonesByColor,
}

/// Response for a created game.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CreateGameResponse {
    /// Generated game ID.
    pub game_id: String,
}

/// Response for a join.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct JoinGameResponse {
    /// Generated player ID.
    pub player_id: String,
    /// Color assigned to the player.
    pub color: TeamColor,
}

/// Request for placing or moving a stone.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PlaceStoneRequest {
    /// Player placing the stone.
    pub player_id: String,
    /// Stone index within the player's set.
    pub index: usize,
    /// Raw drop X.
    pub x: f64,
    /// Raw drop Y.
    pub y: f64,
}

/// Response for a placement attempt.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PlaceStoneResponse {
    /// Outcome after clamping, ban adjustment, and collision resolution.
    #[serde(flatten)]
    pub outcome: PlacementOutcome,
    /// Zone feedback for the resting position; absent when the stone
    /// went back to the tray.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneReport>,
}

/// Request for placing a ban zone.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PlaceBanRequest {
    /// Player placing the ban (it restricts their opponent).
    pub player_id: String,
    /// Zone center X.
    pub x: f64,
    /// Zone center Y.
    pub y: f64,
    /// Zone radius in cm.
    pub radius: f64,
}

/// Request for confirming placement.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConfirmRequest {
    /// Confirming player.
    pub player_id: String,
}

/// Response for a confirmation.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ConfirmResponse {
    /// Always true on success.
    pub confirmed: bool,
    /// Both final arrays, present once this confirmation completed the
    /// reveal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed: Option<RevealedStones>,
}

/// Query for the game view.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GameViewQuery {
    /// Requesting player; determines which stones are redacted.
    #[serde(default)]
    pub player_id: Option<String>,
}

/// Redacted view of a game during the blind phase.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GameViewResponse {
    /// Game ID.
    pub game_id: String,
    /// How many players have joined.
    pub players: usize,
    /// The requesting player's color, if they are in the game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_color: Option<TeamColor>,
    /// The requesting player's own stones.
    pub my_stones: Vec<ConfirmedStone>,
    /// Whether both sides have confirmed.
    pub revealed: bool,
    /// Both final arrays, only after the reveal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stones: Option<RevealedStones>,
}

// Handlers

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "skipstone-api"
    }))
}

/// POST /api/collisions/resolve
///
/// Demo surface: both teams' stones arrive at once (post-reveal), so
/// overlapping pairs split symmetrically instead of one side yielding.
#[instrument(skip(req))]
async fn resolve(Json(req): Json<ResolveRequest>) -> Json<ResolveResponse> {
    info!(
        red = req.stones.red.len(),
        yellow = req.stones.yellow.len(),
        "Resolving collision set"
    );

    let mut set: Vec<RevealedStone> = Vec::with_capacity(req.stones.red.len() + req.stones.yellow.len());
    for p in &req.stones.red {
        set.push(RevealedStone {
            position: *p,
            ban: req.banned_zones.red,
        });
    }
    for p in &req.stones.yellow {
        set.push(RevealedStone {
            position: *p,
            ban: req.banned_zones.yellow,
        });
    }

    resolve_simultaneous(&mut set);

    let (red, rest) = set.split_at(req.stones.red.len());
    Json(ResolveResponse {
        resolved_stones: StonesByColor {
            red: red.iter().map(|s| s.position).collect(),
            yellow: rest.iter().map(|s| s.position).collect(),
        },
    })
}

/// POST /api/games
#[instrument(skip(state))]
async fn create_game(State(state): State<AppState>) -> (StatusCode, Json<CreateGameResponse>) {
    let game_id = state.sessions.create_game();
    info!(%game_id, "Game created");
    (StatusCode::CREATED, Json(CreateGameResponse { game_id }))
}

/// POST /api/games/{id}/join
#[instrument(skip(state))]
async fn join_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<JoinGameResponse>, ApiError> {
    let player_id = uuid::Uuid::new_v4().to_string();
    let player = state
        .sessions
        .with_game(&game_id, |game| game.join(player_id))??;

    Ok(Json(JoinGameResponse {
        player_id: player.id,
        color: player.color,
    }))
}

/// POST /api/games/{id}/stones
#[instrument(skip(state, req))]
async fn place_stone(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(req): Json<PlaceStoneRequest>,
) -> Result<Json<PlaceStoneResponse>, ApiError> {
    let outcome = state
        .sessions
        .with_game(&game_id, |game| {
            game.place_stone(&req.player_id, req.index, req.x, req.y)
        })??;

    let zone = (!outcome.reset_to_bar).then(|| classify(outcome.stone.x, outcome.stone.y));
    Ok(Json(PlaceStoneResponse { outcome, zone }))
}

/// POST /api/games/{id}/bans
#[instrument(skip(state, req))]
async fn place_ban(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(req): Json<PlaceBanRequest>,
) -> Result<Json<BanZone>, ApiError> {
    let zone = state
        .sessions
        .with_game(&game_id, |game| {
            game.place_ban(&req.player_id, req.x, req.y, req.radius)
        })??;
    Ok(Json(zone))
}

/// POST /api/games/{id}/confirm
#[instrument(skip(state, req))]
async fn confirm(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(req): Json<ConfirmRequest>,
) -> Result<Json<ConfirmResponse>, ApiError> {
    let revealed = state
        .sessions
        .with_game(&game_id, |game| game.confirm(&req.player_id))??;

    Ok(Json(ConfirmResponse {
        confirmed: true,
        revealed,
    }))
}

/// GET /api/games/{id}
///
/// During the blind phase the opponent's stones are redacted; after
/// both confirmations the full arrays are returned.
#[instrument(skip(state))]
async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Query(query): Query<GameViewQuery>,
) -> Result<Json<GameViewResponse>, ApiError> {
    let game = state.sessions.get_game(&game_id).ok_or(ApiError::NotFound)?;

    let my_color = query
        .player_id
        .as_deref()
        .and_then(|id| game.player(id))
        .map(|p| p.color);
    let my_stones = my_color
        .map(|color| {
            let placement = match color {
                TeamColor::Red => &game.red_placement,
                TeamColor::Yellow => &game.yellow_placement,
            };
            placement
                .stones
                .iter()
                .filter(|s| s.placed)
                .map(|s| ConfirmedStone {
                    index: s.index,
                    x: s.x,
                    y: s.y,
                })
                .collect()
        })
        .unwrap_or_default();

    let players = [game.red.is_some(), game.yellow.is_some()]
        .iter()
        .filter(|joined| **joined)
        .count();

    Ok(Json(GameViewResponse {
        game_id: game.id.clone(),
        players,
        my_color,
        my_stones,
        revealed: game.is_revealed(),
        stones: game.revealed(),
    }))
}
