//! Pollutant concentration endpoints.
//!
//! - `GET /pollutants?latitude=..&longitude=..` — fetch current pollutant
//!   concentrations and classify each one against its breakpoint table.
//! - `GET /pollutants/info` — static reference data for every tracked
//!   pollutant.
//! - `GET /pollutants/info/{code}` — reference data for one pollutant.
//!
//! Like `/air-quality`, an upstream failure degrades to the all-zero/Unknown
//! summary instead of an error response.

use axum::{
    extract::Path, extract::Query, extract::State, http::StatusCode, response::IntoResponse,
    routing::get, Json, Router,
};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{error, info};

use crate::aqi::{self, PollutantCode, PollutantInfo};
use crate::upstream::{self, ExtraComputation};
use crate::{Config, PollutantsSummary};

// ---

pub fn router() -> Router<(PgPool, Config)> {
    // ---
    Router::new()
        .route("/pollutants", get(handler))
        .route("/pollutants/info", get(info_all))
        .route("/pollutants/info/{code}", get(info_one))
}

#[derive(Debug, Deserialize)]
struct LocationQuery {
    latitude: f64,
    longitude: f64,
}

async fn handler(
    Query(params): Query<LocationQuery>,
    State((_pool, config)): State<(PgPool, Config)>,
) -> impl IntoResponse {
    // ---
    info!(
        "GET /pollutants - ({}, {})",
        params.latitude, params.longitude
    );

    let conditions = match upstream::fetch_conditions(
        &config.conditions_url,
        &config.air_quality_api_key,
        params.latitude,
        params.longitude,
        ExtraComputation::PollutantConcentration,
    )
    .await
    {
        Ok(conditions) => conditions,
        Err(e) => {
            error!("Failed to fetch pollutants: {}", e);
            return (StatusCode::OK, Json(PollutantsSummary::default())).into_response();
        }
    };

    let summary = conditions.to_pollutants();

    let (worst_code, worst_status) = summary.most_severe();
    info!("Pollutants classified; most severe: {worst_code} ({worst_status})");

    (StatusCode::OK, Json(summary)).into_response()
}

// ---

async fn info_all() -> Json<Vec<&'static PollutantInfo>> {
    // ---
    Json(
        PollutantCode::ALL
            .iter()
            .map(|&code| aqi::pollutant_info(code))
            .collect(),
    )
}

async fn info_one(Path(code): Path<String>) -> impl IntoResponse {
    // ---
    match code.parse::<PollutantCode>() {
        Ok(code) => (StatusCode::OK, Json(aqi::pollutant_info(code))).into_response(),
        Err(()) => (StatusCode::NOT_FOUND, Json("Unknown pollutant code")).into_response(),
    }
}
