//! Client for the upstream air-quality conditions endpoint.
//!
//! Single-shot request/response, no retry policy: a failed fetch is reported
//! to the caller, which degrades to a fallback payload instead of erroring
//! out the request.

use anyhow::{bail, Result};
use serde_json::json;

use crate::models::ConditionsResponse;

// ---

/// Extra computation requested from the conditions endpoint. The provider
/// returns the same envelope either way; the flag controls which sections
/// are populated.
#[derive(Debug, Clone, Copy)]
pub enum ExtraComputation {
    // ---
    HealthRecommendations,
    PollutantConcentration,
}

impl ExtraComputation {
    fn as_str(&self) -> &'static str {
        // ---
        match self {
            ExtraComputation::HealthRecommendations => "HEALTH_RECOMMENDATIONS",
            ExtraComputation::PollutantConcentration => "POLLUTANT_CONCENTRATION",
        }
    }
}

/// Fetch current conditions for a coordinate pair.
///
/// Posts a lookup request to the configured conditions endpoint and parses
/// the response into the defaulted [`ConditionsResponse`] boundary type.
/// Non-2xx responses and transport failures are returned as errors.
pub async fn fetch_conditions(
    conditions_url: &str,
    api_key: &str,
    latitude: f64,
    longitude: f64,
    extra: ExtraComputation,
) -> Result<ConditionsResponse> {
    // ---
    let client = reqwest::Client::new();

    tracing::debug!(
        "Fetching conditions for ({}, {}) with {}",
        latitude,
        longitude,
        extra.as_str()
    );

    let response = client
        .post(conditions_url)
        .query(&[("key", api_key)])
        .json(&json!({
            "location": { "latitude": latitude, "longitude": longitude },
            "extraComputations": [extra.as_str()],
        }))
        .send()
        .await?;

    if !response.status().is_success() {
        bail!("conditions API error: {}", response.status());
    }

    let parsed = response.json::<ConditionsResponse>().await?;

    tracing::debug!(
        "Conditions response: {} index(es), {} pollutant(s)",
        parsed.indexes.len(),
        parsed.pollutants.len()
    );

    Ok(parsed)
}
