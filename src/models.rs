//! Data models for the air-quality pipeline.
//!
//! Upstream payloads are parsed into defaulted, strongly-typed structs at the
//! boundary so the classifier never sees missing or drifting JSON shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aqi::{self, NormalizedColor, PollutantCode, StatusTier};

// ---

/// Raw current-conditions payload from the upstream index provider.
///
/// Every field is defaulted: a partial or empty response degrades to the
/// fallback assessment instead of failing to parse.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionsResponse {
    // ---
    pub indexes: Vec<AqiIndex>,
    pub pollutants: Vec<PollutantEntry>,
}

/// One AQI index entry (the provider may report several; the first is used).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AqiIndex {
    // ---
    pub aqi: i32,
    pub category: String,
    pub color: Option<NormalizedColor>,
    pub dominant_pollutant: Option<String>,
}

/// One pollutant concentration entry.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PollutantEntry {
    // ---
    pub code: String,
    pub concentration: Concentration,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Concentration {
    pub value: f64,
}

// ---

/// Display-ready air-quality assessment for the API response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityAssessment {
    // ---
    pub percentage: u8,
    pub status: String,
    pub aqi: i32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_pollutant: Option<String>,
    pub recommendation: String,
}

impl AirQualityAssessment {
    /// Hardcoded fallback returned when the upstream fetch fails; the
    /// classifier is never invoked on that path.
    pub fn unavailable() -> Self {
        // ---
        AirQualityAssessment {
            percentage: 0,
            status: "Unavailable".to_string(),
            aqi: 0,
            color: aqi::DEFAULT_COLOR.to_string(),
            dominant_pollutant: None,
            recommendation: aqi::recommendation_for(StatusTier::Unknown).to_string(),
        }
    }
}

/// Per-pollutant value and status for the API response.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PollutantStatus {
    // ---
    pub value: f64,
    pub status: StatusTier,
}

impl Default for PollutantStatus {
    fn default() -> Self {
        PollutantStatus {
            value: 0.0,
            status: StatusTier::Unknown,
        }
    }
}

/// Fixed-key pollutant summary, one slot per tracked pollutant. The default
/// (all zero / Unknown) doubles as the fetch-failure fallback.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PollutantsSummary {
    // ---
    pub pm25: PollutantStatus,
    pub pm10: PollutantStatus,
    pub o3: PollutantStatus,
    pub co: PollutantStatus,
    pub no2: PollutantStatus,
    pub so2: PollutantStatus,
}

impl PollutantsSummary {
    fn slot_mut(&mut self, code: PollutantCode) -> &mut PollutantStatus {
        // ---
        match code {
            PollutantCode::Pm25 => &mut self.pm25,
            PollutantCode::Pm10 => &mut self.pm10,
            PollutantCode::O3 => &mut self.o3,
            PollutantCode::Co => &mut self.co,
            PollutantCode::No2 => &mut self.no2,
            PollutantCode::So2 => &mut self.so2,
        }
    }

    fn slot(&self, code: PollutantCode) -> &PollutantStatus {
        // ---
        match code {
            PollutantCode::Pm25 => &self.pm25,
            PollutantCode::Pm10 => &self.pm10,
            PollutantCode::O3 => &self.o3,
            PollutantCode::Co => &self.co,
            PollutantCode::No2 => &self.no2,
            PollutantCode::So2 => &self.so2,
        }
    }

    /// The pollutant with the worst status tier, for display-priority
    /// ordering. Ties resolve to the first code in declaration order.
    pub fn most_severe(&self) -> (PollutantCode, StatusTier) {
        // ---
        let mut worst = (PollutantCode::Pm25, self.pm25.status);
        for &code in &PollutantCode::ALL[1..] {
            let status = self.slot(code).status;
            if status < worst.1 {
                worst = (code, status);
            }
        }
        worst
    }
}

/// Transformation helpers from the raw upstream payload.
impl ConditionsResponse {
    // ---
    /// Build the display assessment from the first reported index.
    pub fn to_assessment(&self) -> AirQualityAssessment {
        // ---
        let Some(index) = self.indexes.first() else {
            return AirQualityAssessment::unavailable();
        };

        let tier = aqi::classify_category(&index.category);
        let percentage = aqi::display_percentage(index.aqi, &index.category);

        // Prefer the API-supplied color; fall back to the percentage ladder
        // when the triple is absent.
        let color = match index.color.as_ref() {
            Some(c) => aqi::hex_from_normalized(Some(c)),
            None => aqi::hex_for_percentage(percentage).to_string(),
        };

        AirQualityAssessment {
            percentage,
            status: tier.label().to_string(),
            aqi: index.aqi,
            color,
            dominant_pollutant: index.dominant_pollutant.clone(),
            recommendation: aqi::recommendation_for(tier).to_string(),
        }
    }

    /// Classify every reported pollutant concentration. Pollutants the
    /// upstream omits keep their zero/Unknown defaults; codes outside the
    /// tracked set are ignored.
    pub fn to_pollutants(&self) -> PollutantsSummary {
        // ---
        let mut summary = PollutantsSummary::default();

        for entry in &self.pollutants {
            let Ok(code) = entry.code.parse::<PollutantCode>() else {
                continue;
            };
            let rounded = aqi::round2(entry.concentration.value);
            *summary.slot_mut(code) = PollutantStatus {
                value: rounded,
                status: aqi::classify_pollutant(code, rounded),
            };
        }

        summary
    }
}

// ---

/// Registered user row: push token plus last-known location and AQI, as
/// written by the mobile client.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    // ---
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub expo_push_token: Option<String>,
    pub current_lat: Option<f64>,
    pub current_lng: Option<f64>,
    pub current_city: Option<String>,
    pub current_aqi: Option<i32>,
}

/// Community air-quality report row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    // ---
    pub id: uuid::Uuid,
    pub user_id: Option<String>,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::json;

    fn sample_response() -> ConditionsResponse {
        // ---
        serde_json::from_value(json!({
            "indexes": [{
                "aqi": 45,
                "category": "Good air quality",
                "color": { "red": 0.0, "green": 0.9, "blue": 0.1 },
                "dominantPollutant": "pm25"
            }],
            "pollutants": [
                { "code": "pm25", "concentration": { "value": 11.234, "units": "MICROGRAMS_PER_CUBIC_METER" } },
                { "code": "co", "concentration": { "value": 9400.0 } },
                { "code": "nox", "concentration": { "value": 3.0 } }
            ]
        }))
        .expect("sample payload parses")
    }

    #[test]
    fn test_assessment_from_sample() {
        // ---
        let assessment = sample_response().to_assessment();

        assert_eq!(assessment.status, "Good");
        assert_eq!(assessment.aqi, 45);
        assert!((90..=98).contains(&assessment.percentage));
        assert_eq!(assessment.color, "#00E61A");
        assert_eq!(assessment.dominant_pollutant.as_deref(), Some("pm25"));
        assert!(assessment.recommendation.contains("excellent"));
    }

    #[test]
    fn test_assessment_missing_color_uses_ladder() {
        // ---
        let response: ConditionsResponse = serde_json::from_value(json!({
            "indexes": [{ "aqi": 30, "category": "Good" }]
        }))
        .unwrap();

        let assessment = response.to_assessment();
        // Good band is 90–98, which lands on the green rung.
        assert_eq!(assessment.color, "#4CAF50");
    }

    #[test]
    fn test_assessment_empty_payload_is_unavailable() {
        // ---
        let response: ConditionsResponse = serde_json::from_value(json!({})).unwrap();
        let assessment = response.to_assessment();

        assert_eq!(assessment.status, "Unavailable");
        assert_eq!(assessment.percentage, 0);
        assert_eq!(assessment.color, crate::aqi::DEFAULT_COLOR);
    }

    #[test]
    fn test_pollutants_round_and_classify() {
        // ---
        let summary = sample_response().to_pollutants();

        // 11.234 rounds to 11.23 and stays in the Good band.
        assert_eq!(summary.pm25.value, 11.23);
        assert_eq!(summary.pm25.status, StatusTier::Good);

        // 9400 ppb CO converts to 9.4 ppm, exactly Moderate.
        assert_eq!(summary.co.status, StatusTier::Moderate);

        // Unreported pollutants keep the Unknown default; the unrecognized
        // "nox" entry is dropped.
        assert_eq!(summary.o3.status, StatusTier::Unknown);
        assert_eq!(summary.o3.value, 0.0);
    }

    #[test]
    fn test_most_severe_ordering() {
        // ---
        let mut summary = sample_response().to_pollutants();
        summary.so2 = PollutantStatus {
            value: 700.0,
            status: StatusTier::Hazardous,
        };

        let (code, status) = summary.most_severe();
        assert_eq!(code, PollutantCode::So2);
        assert_eq!(status, StatusTier::Hazardous);
    }

    #[test]
    fn test_response_serialization_shape() {
        // ---
        let value = serde_json::to_value(sample_response().to_assessment()).unwrap();
        assert!(value.get("dominantPollutant").is_some());
        assert!(value.get("percentage").is_some());

        let value = serde_json::to_value(sample_response().to_pollutants()).unwrap();
        assert_eq!(value["co"]["status"], "Moderate");
        assert_eq!(value["pm25"]["value"], 11.23);
    }
}
