//! Current air-quality assessment endpoint.
//!
//! `GET /air-quality?latitude=..&longitude=..` runs the full pipeline for one
//! coordinate pair: fetch current conditions from the upstream provider,
//! classify them into a display-ready assessment, record the derived row in
//! `assessment_history`, and return the assessment as JSON.
//!
//! An upstream fetch failure is not an error for the client: the handler
//! responds 200 with the hardcoded "Unavailable" fallback so the display
//! layer always has something to render.

use axum::{
    extract::Query, extract::State, http::StatusCode, response::IntoResponse, routing::get, Json,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{debug, error, info};

use crate::upstream::{self, ExtraComputation};
use crate::{AirQualityAssessment, Config};

// ---

pub fn router() -> Router<(PgPool, Config)> {
    // ---
    Router::new().route("/air-quality", get(handler))
}

/// Coordinate pair for a conditions lookup.
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    latitude: f64,
    longitude: f64,
}

async fn handler(
    Query(params): Query<LocationQuery>,
    State((pool, config)): State<(PgPool, Config)>,
) -> impl IntoResponse {
    // ---
    info!(
        "GET /air-quality - ({}, {})",
        params.latitude, params.longitude
    );

    // Step 1: Fetch current conditions from the upstream provider
    debug!("GET /air-quality - Step 1");

    let conditions = match upstream::fetch_conditions(
        &config.conditions_url,
        &config.air_quality_api_key,
        params.latitude,
        params.longitude,
        ExtraComputation::HealthRecommendations,
    )
    .await
    {
        Ok(conditions) => conditions,
        Err(e) => {
            error!("Failed to fetch air quality: {}", e);
            return (StatusCode::OK, Json(AirQualityAssessment::unavailable())).into_response();
        }
    };

    // Step 2: Classify into the display assessment
    debug!("GET /air-quality - Step 2");

    let assessment = conditions.to_assessment();

    // Step 3: Record the derived row; a storage failure is logged but does
    // not fail the request.
    debug!("GET /air-quality - Step 3");

    if let Err(e) = store_assessment(&pool, &params, &assessment).await {
        error!("Failed to store assessment: {}", e);
    }

    info!(
        "Assessment complete: aqi={} status={} percentage={}",
        assessment.aqi, assessment.status, assessment.percentage
    );
    (StatusCode::OK, Json(assessment)).into_response()
}

// ---

/// Store a derived assessment in the history table
async fn store_assessment(
    pool: &PgPool,
    location: &LocationQuery,
    assessment: &AirQualityAssessment,
) -> Result<(), sqlx::Error> {
    // ---
    sqlx::query(
        r#"
        INSERT INTO assessment_history (
            latitude, longitude, aqi, status, percentage,
            color, dominant_pollutant, recorded_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(location.latitude)
    .bind(location.longitude)
    .bind(assessment.aqi)
    .bind(&assessment.status)
    .bind(i32::from(assessment.percentage))
    .bind(&assessment.color)
    .bind(&assessment.dominant_pollutant)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}
