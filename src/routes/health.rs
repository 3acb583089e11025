// src/routes/health.rs
//! API health check endpoint for the AirHealth backend.
//!
//! Defines the `/health` route used by the mobile client's connectivity
//! probe and by deployment checks to verify the service is up. Sibling
//! module in the `routes` directory (EMBP): the handler stays internal and
//! only the subrouter is exported to the gateway.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// Handle `GET /health`.
///
/// Deliberately lightweight: no database or upstream calls, just proof the
/// HTTP layer is serving.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "airhealth-backend",
    })
}

/// Create a subrouter containing the `/health` route.
///
/// Generic over the application state so it merges cleanly with the gateway
/// router regardless of the state type (here `(PgPool, Config)`).
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
