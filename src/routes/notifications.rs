//! Push notification endpoints.
//!
//! `POST /notifications/single` relays one message to a given Expo push
//! token (used for testing deliveries); `POST /notifications/broadcast`
//! sends a message to every registered user with a token.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;
use tracing::{error, info};

use crate::notify::{self, PushOutcome};
use crate::routes::users::fetch_users;
use crate::Config;

// ---

pub fn router() -> Router<(PgPool, Config)> {
    // ---
    Router::new()
        .route("/notifications/single", post(single))
        .route("/notifications/broadcast", post(broadcast))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SingleRequest {
    // ---
    expo_push_token: Option<String>,
    title: Option<String>,
    body: Option<String>,
}

async fn single(
    State((_pool, config)): State<(PgPool, Config)>,
    Json(request): Json<SingleRequest>,
) -> impl IntoResponse {
    // ---
    let (Some(token), Some(title), Some(body)) =
        (&request.expo_push_token, &request.title, &request.body)
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing required fields" })),
        )
            .into_response();
    };

    info!("POST /notifications/single");

    let outcome = notify::send_push(&config.expo_push_url, token, title, body, json!({})).await;
    (StatusCode::OK, Json(outcome)).into_response()
}

// ---

#[derive(Debug, Deserialize)]
struct BroadcastRequest {
    // ---
    title: Option<String>,
    body: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BroadcastResponse {
    // ---
    message: &'static str,
    total_sent: usize,
    results: Vec<PushOutcome>,
}

async fn broadcast(
    State((pool, config)): State<(PgPool, Config)>,
    Json(request): Json<BroadcastRequest>,
) -> impl IntoResponse {
    // ---
    let (Some(title), Some(body)) = (&request.title, &request.body) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing title or body" })),
        )
            .into_response();
    };

    info!("POST /notifications/broadcast");

    let users = match fetch_users(&pool).await {
        Ok(users) => users,
        Err(e) => {
            error!("Error broadcasting: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    let results = notify::broadcast(&config.expo_push_url, &users, title, body).await;

    info!("Broadcast sent to {} user(s)", results.len());
    (
        StatusCode::OK,
        Json(BroadcastResponse {
            message: "Broadcast sent",
            total_sent: results.len(),
            results,
        }),
    )
        .into_response()
}
