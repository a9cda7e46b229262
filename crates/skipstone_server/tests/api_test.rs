//! End-to-end API tests driven through the router without a socket.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use skipstone_server::{AppState, router};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn resolve_splits_an_overlapping_pair_symmetrically() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/collisions/resolve",
        Some(json!({
            "stones": {
                "red": [{ "x": 237.0, "y": 640.0 }],
                "yellow": [{ "x": 245.0, "y": 640.0 }]
            },
            "banned_zones": {}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let red = &body["resolved_stones"]["red"][0];
    let yellow = &body["resolved_stones"]["yellow"][0];
    assert!((red["x"].as_f64().unwrap() - 226.5).abs() < 1e-6);
    assert!((yellow["x"].as_f64().unwrap() - 255.5).abs() < 1e-6);
    assert_eq!(red["y"].as_f64().unwrap(), 640.0);
    assert_eq!(yellow["y"].as_f64().unwrap(), 640.0);
}

#[tokio::test]
async fn resolve_leaves_separated_stones_alone() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/collisions/resolve",
        Some(json!({
            "stones": {
                "red": [{ "x": 100.0, "y": 700.0 }],
                "yellow": [{ "x": 300.0, "y": 800.0 }]
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resolved_stones"]["red"][0]["x"].as_f64().unwrap(), 100.0);
    assert_eq!(body["resolved_stones"]["yellow"][0]["y"].as_f64().unwrap(), 800.0);
}

#[tokio::test]
async fn game_lifecycle_assigns_colors_and_rejects_a_third_player() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/games", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let game_id = body["game_id"].as_str().unwrap().to_string();

    let join = format!("/api/games/{game_id}/join");
    let (status, body) = send(&app, "POST", &join, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["color"], "red");

    let (status, body) = send(&app, "POST", &join, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["color"], "yellow");

    let (status, body) = send(&app, "POST", &join, None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Game already has 2 players");
}

#[tokio::test]
async fn unknown_game_is_404() {
    let app = app();
    let (status, body) = send(&app, "POST", "/api/games/nope/join", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Game not found");

    let (status, _) = send(&app, "GET", "/api/games/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blind_phase_redacts_until_both_confirm() {
    let app = app();

    let (_, body) = send(&app, "POST", "/api/games", None).await;
    let game_id = body["game_id"].as_str().unwrap().to_string();

    let join = format!("/api/games/{game_id}/join");
    let (_, body) = send(&app, "POST", &join, None).await;
    let red_id = body["player_id"].as_str().unwrap().to_string();
    let (_, body) = send(&app, "POST", &join, None).await;
    let yellow_id = body["player_id"].as_str().unwrap().to_string();

    let stones = format!("/api/games/{game_id}/stones");
    let (status, body) = send(
        &app,
        "POST",
        &stones,
        Some(json!({ "player_id": red_id, "index": 0, "x": 237.5, "y": 700.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reset_to_bar"], false);
    assert_eq!(body["zone"]["zone"], "house");

    let (_, body) = send(
        &app,
        "POST",
        &stones,
        Some(json!({ "player_id": yellow_id, "index": 0, "x": 150.0, "y": 100.0 })),
    )
    .await;
    assert_eq!(body["zone"]["zone"], "guard");

    // Yellow's view: own stone visible, red's redacted, nothing revealed.
    let view = format!("/api/games/{game_id}?player_id={yellow_id}");
    let (status, body) = send(&app, "GET", &view, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["players"], 2);
    assert_eq!(body["my_color"], "yellow");
    assert_eq!(body["my_stones"].as_array().unwrap().len(), 1);
    assert_eq!(body["revealed"], false);
    assert!(body.get("stones").is_none());

    let confirm = format!("/api/games/{game_id}/confirm");
    let (status, body) = send(&app, "POST", &confirm, Some(json!({ "player_id": red_id }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["confirmed"], true);
    assert!(body.get("revealed").is_none());

    let (_, body) = send(&app, "POST", &confirm, Some(json!({ "player_id": yellow_id }))).await;
    let revealed = &body["revealed"];
    assert_eq!(revealed["red"].as_array().unwrap().len(), 1);
    assert_eq!(revealed["yellow"][0]["x"].as_f64().unwrap(), 150.0);

    // After the reveal the full arrays are in the game view too.
    let (_, body) = send(&app, "GET", &view, None).await;
    assert_eq!(body["revealed"], true);
    assert_eq!(body["stones"]["red"].as_array().unwrap().len(), 1);

    // Confirmed placements are locked.
    let (status, _) = send(
        &app,
        "POST",
        &stones,
        Some(json!({ "player_id": red_id, "index": 0, "x": 200.0, "y": 800.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn ban_zone_swallows_opponent_drops() {
    let app = app();

    let (_, body) = send(&app, "POST", "/api/games", None).await;
    let game_id = body["game_id"].as_str().unwrap().to_string();
    let join = format!("/api/games/{game_id}/join");
    let (_, body) = send(&app, "POST", &join, None).await;
    let red_id = body["player_id"].as_str().unwrap().to_string();
    let (_, body) = send(&app, "POST", &join, None).await;
    let yellow_id = body["player_id"].as_str().unwrap().to_string();

    let bans = format!("/api/games/{game_id}/bans");
    let (status, body) = send(
        &app,
        "POST",
        &bans,
        Some(json!({ "player_id": red_id, "x": 237.5, "y": 800.0, "radius": 50.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["radius"].as_f64().unwrap(), 50.0);

    let stones = format!("/api/games/{game_id}/stones");

    // Red placed the ban, so red is unaffected.
    let (_, body) = send(
        &app,
        "POST",
        &stones,
        Some(json!({ "player_id": red_id, "index": 0, "x": 237.5, "y": 800.0 })),
    )
    .await;
    assert_eq!(body["reset_to_bar"], false);

    // Yellow dropping dead center goes back to the tray.
    let (status, body) = send(
        &app,
        "POST",
        &stones,
        Some(json!({ "player_id": yellow_id, "index": 0, "x": 237.5, "y": 800.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reset_to_bar"], true);
    assert!(body.get("zone").is_none());
}

#[tokio::test]
async fn oversized_ban_radius_is_400() {
    let app = app();

    let (_, body) = send(&app, "POST", "/api/games", None).await;
    let game_id = body["game_id"].as_str().unwrap().to_string();
    let join = format!("/api/games/{game_id}/join");
    let (_, body) = send(&app, "POST", &join, None).await;
    let red_id = body["player_id"].as_str().unwrap().to_string();

    let bans = format!("/api/games/{game_id}/bans");
    let (status, body) = send(
        &app,
        "POST",
        &bans,
        Some(json!({ "player_id": red_id, "x": 237.5, "y": 640.0, "radius": 300.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Ban zone does not fit on the sheet");
}

#[tokio::test]
async fn out_of_range_stone_index_is_400() {
    let app = app();

    let (_, body) = send(&app, "POST", "/api/games", None).await;
    let game_id = body["game_id"].as_str().unwrap().to_string();
    let join = format!("/api/games/{game_id}/join");
    let (_, body) = send(&app, "POST", &join, None).await;
    let red_id = body["player_id"].as_str().unwrap().to_string();

    let stones = format!("/api/games/{game_id}/stones");
    let (status, body) = send(
        &app,
        "POST",
        &stones,
        Some(json!({ "player_id": red_id, "index": 8, "x": 200.0, "y": 800.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Stone index out of range");
}
