//! User listing and upsert endpoints.
//!
//! `GET /users` returns every registered user with their push token and
//! last-known location/AQI (the shape the notification broadcaster
//! consumes). `POST /users` upserts a user document, which is how the mobile
//! client registers its push token and refreshes its last-known reading.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{error, info};

use crate::{Config, User};

// ---

pub fn router() -> Router<(PgPool, Config)> {
    // ---
    Router::new().route("/users", get(list_users).post(upsert_user))
}

#[derive(Debug, Serialize)]
struct UsersResponse {
    // ---
    success: bool,
    users: Vec<User>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

async fn list_users(State((pool, _config)): State<(PgPool, Config)>) -> impl IntoResponse {
    // ---
    info!("GET /users");

    match fetch_users(&pool).await {
        Ok(users) => (
            StatusCode::OK,
            Json(UsersResponse {
                success: true,
                users,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error fetching users: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Load all user rows, shared with the notification broadcaster.
pub async fn fetch_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    // ---
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, name, email, expo_push_token,
               current_lat, current_lng, current_city, current_aqi
        FROM users
        ORDER BY user_id
        "#,
    )
    .fetch_all(pool)
    .await
}

// ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpsertUser {
    // ---
    user_id: String,
    name: Option<String>,
    email: Option<String>,
    expo_push_token: Option<String>,
    current_lat: Option<f64>,
    current_lng: Option<f64>,
    current_city: Option<String>,
    current_aqi: Option<i32>,
}

async fn upsert_user(
    State((pool, _config)): State<(PgPool, Config)>,
    Json(body): Json<UpsertUser>,
) -> impl IntoResponse {
    // ---
    info!("POST /users - {}", body.user_id);

    let result = sqlx::query(
        r#"
        INSERT INTO users (
            user_id, name, email, expo_push_token,
            current_lat, current_lng, current_city, current_aqi
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (user_id) DO UPDATE SET
            name            = COALESCE(EXCLUDED.name, users.name),
            email           = COALESCE(EXCLUDED.email, users.email),
            expo_push_token = COALESCE(EXCLUDED.expo_push_token, users.expo_push_token),
            current_lat     = COALESCE(EXCLUDED.current_lat, users.current_lat),
            current_lng     = COALESCE(EXCLUDED.current_lng, users.current_lng),
            current_city    = COALESCE(EXCLUDED.current_city, users.current_city),
            current_aqi     = COALESCE(EXCLUDED.current_aqi, users.current_aqi)
        "#,
    )
    .bind(&body.user_id)
    .bind(&body.name)
    .bind(&body.email)
    .bind(&body.expo_push_token)
    .bind(body.current_lat)
    .bind(body.current_lng)
    .bind(&body.current_city)
    .bind(body.current_aqi)
    .execute(&pool)
    .await;

    match result {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true })),
        )
            .into_response(),
        Err(e) => {
            error!("Error upserting user {}: {}", body.user_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
