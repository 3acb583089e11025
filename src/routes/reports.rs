//! Community report endpoints.
//!
//! `GET /reports` lists submitted reports, newest first; `POST /reports`
//! records a new report with a generated id and server-side timestamp.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use crate::{Config, Report};

// ---

pub fn router() -> Router<(PgPool, Config)> {
    // ---
    Router::new().route("/reports", get(list_reports).post(create_report))
}

async fn list_reports(State((pool, _config)): State<(PgPool, Config)>) -> impl IntoResponse {
    // ---
    info!("GET /reports");

    let result = sqlx::query_as::<_, Report>(
        r#"
        SELECT id, user_id, description, latitude, longitude, image_url, created_at
        FROM reports
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(&pool)
    .await;

    match result {
        Ok(reports) => (StatusCode::OK, Json(reports)).into_response(),
        Err(e) => {
            error!("Failed to fetch reports: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch reports" })),
            )
                .into_response()
        }
    }
}

// ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateReport {
    // ---
    user_id: Option<String>,
    description: String,
    latitude: f64,
    longitude: f64,
    image_url: Option<String>,
}

async fn create_report(
    State((pool, _config)): State<(PgPool, Config)>,
    Json(body): Json<CreateReport>,
) -> impl IntoResponse {
    // ---
    info!("POST /reports");

    let report = Report {
        id: Uuid::new_v4(),
        user_id: body.user_id,
        description: body.description,
        latitude: body.latitude,
        longitude: body.longitude,
        image_url: body.image_url,
        created_at: Utc::now(),
    };

    let result = sqlx::query(
        r#"
        INSERT INTO reports (id, user_id, description, latitude, longitude, image_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(report.id)
    .bind(&report.user_id)
    .bind(&report.description)
    .bind(report.latitude)
    .bind(report.longitude)
    .bind(&report.image_url)
    .bind(report.created_at)
    .execute(&pool)
    .await;

    match result {
        Ok(_) => (StatusCode::CREATED, Json(report)).into_response(),
        Err(e) => {
            error!("Failed to store report: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to store report" })),
            )
                .into_response()
        }
    }
}
