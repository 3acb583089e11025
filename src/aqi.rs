//! Air-quality classification core for the AirHealth pipeline.
//!
//! Pure, stateless translation from raw upstream measurements to
//! display-ready values:
//! - Simplify a free-text index category into a [`StatusTier`]
//! - Convert a raw AQI (0–500) into a bounded display percentage
//! - Classify individual pollutant concentrations against EPA-style
//!   breakpoint tables
//! - Render colors (API-supplied normalized RGB, or a percentage ladder)
//! - Look up a health recommendation per tier
//!
//! Every function here is total: no I/O, no panics, no shared state. All
//! network fetches and persistence happen in the route layer and are passed
//! in as already-resolved values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

// ---

/// Fallback color when the upstream provides no usable RGB triple.
pub const DEFAULT_COLOR: &str = "#A9A9A9";

/// Discrete health-impact category, ordered worst → best so that sorting
/// surfaces the most severe reading first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusTier {
    // ---
    Hazardous,
    VeryUnhealthy,
    Unhealthy,
    UnhealthyForSensitive,
    Low,
    Moderate,
    Good,
    Unknown,
}

impl StatusTier {
    /// Human-readable label, matching what the mobile client displays.
    pub fn label(&self) -> &'static str {
        // ---
        match self {
            StatusTier::Hazardous => "Hazardous",
            StatusTier::VeryUnhealthy => "Very Unhealthy",
            StatusTier::Unhealthy => "Unhealthy",
            StatusTier::UnhealthyForSensitive => "Unhealthy for Sensitive",
            StatusTier::Low => "Low",
            StatusTier::Moderate => "Moderate",
            StatusTier::Good => "Good",
            StatusTier::Unknown => "Unknown",
        }
    }

    /// Closed display-percentage band `[min, max]` for this tier.
    ///
    /// `Low` and `Unknown` have no dedicated band and span the full scale.
    pub fn percentage_band(&self) -> (u8, u8) {
        // ---
        match self {
            StatusTier::Good => (90, 98),
            StatusTier::Moderate => (70, 89),
            StatusTier::UnhealthyForSensitive => (50, 69),
            StatusTier::Unhealthy => (30, 49),
            StatusTier::VeryUnhealthy => (10, 29),
            StatusTier::Hazardous => (0, 9),
            StatusTier::Low | StatusTier::Unknown => (0, 100),
        }
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for StatusTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl FromStr for StatusTier {
    type Err = ();

    /// Case-insensitive match against the tier labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // ---
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "hazardous" => Ok(StatusTier::Hazardous),
            "very unhealthy" => Ok(StatusTier::VeryUnhealthy),
            "unhealthy" => Ok(StatusTier::Unhealthy),
            "unhealthy for sensitive" => Ok(StatusTier::UnhealthyForSensitive),
            "low" => Ok(StatusTier::Low),
            "moderate" => Ok(StatusTier::Moderate),
            "good" => Ok(StatusTier::Good),
            "unknown" => Ok(StatusTier::Unknown),
            _ => Err(()),
        }
    }
}

// ---

/// Pollutants reported by the upstream conditions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollutantCode {
    // ---
    Pm25,
    Pm10,
    O3,
    Co,
    No2,
    So2,
}

impl PollutantCode {
    pub const ALL: [PollutantCode; 6] = [
        PollutantCode::Pm25,
        PollutantCode::Pm10,
        PollutantCode::O3,
        PollutantCode::Co,
        PollutantCode::No2,
        PollutantCode::So2,
    ];

    /// Upstream wire code (also used as the JSON response key).
    pub fn as_str(&self) -> &'static str {
        // ---
        match self {
            PollutantCode::Pm25 => "pm25",
            PollutantCode::Pm10 => "pm10",
            PollutantCode::O3 => "o3",
            PollutantCode::Co => "co",
            PollutantCode::No2 => "no2",
            PollutantCode::So2 => "so2",
        }
    }
}

impl fmt::Display for PollutantCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PollutantCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // ---
        match s.trim().to_lowercase().as_str() {
            "pm25" => Ok(PollutantCode::Pm25),
            "pm10" => Ok(PollutantCode::Pm10),
            "o3" => Ok(PollutantCode::O3),
            "co" => Ok(PollutantCode::Co),
            "no2" => Ok(PollutantCode::No2),
            "so2" => Ok(PollutantCode::So2),
            _ => Err(()),
        }
    }
}

// ---

/// Ordered keyword rules for category simplification, most specific first.
/// "unhealthy for sensitive" must precede "unhealthy" (substring-superset
/// hazard), and "very unhealthy" likewise.
const CATEGORY_RULES: &[(&str, StatusTier)] = &[
    ("unhealthy for sensitive", StatusTier::UnhealthyForSensitive),
    ("sensitive groups", StatusTier::UnhealthyForSensitive),
    ("very unhealthy", StatusTier::VeryUnhealthy),
    ("unhealthy", StatusTier::Unhealthy),
    ("hazardous", StatusTier::Hazardous),
    ("good", StatusTier::Good),
    ("excellent", StatusTier::Good),
    ("moderate", StatusTier::Moderate),
    ("low", StatusTier::Low),
];

/// Simplify a free-text index category into a [`StatusTier`].
///
/// Matching is case-insensitive; the first rule whose keyword occurs as a
/// substring wins. If no keyword matches, the first whitespace-delimited
/// token is compared against the tier labels; anything else (including empty
/// input) yields [`StatusTier::Unknown`].
pub fn classify_category(raw_category: &str) -> StatusTier {
    // ---
    let lower = raw_category.trim().to_lowercase();
    if lower.is_empty() {
        return StatusTier::Unknown;
    }

    for (keyword, tier) in CATEGORY_RULES {
        if lower.contains(keyword) {
            return *tier;
        }
    }

    lower
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(StatusTier::Unknown)
}

/// Convert a raw AQI (0–500) and its category into a 0–100 display score.
///
/// The raw score is the inverse-linear `100 - aqi/500*100`, clamped to the
/// category's display band so that e.g. a "Good" reading never shows below
/// 90%. Out-of-range AQI values are not rejected; they saturate at the band
/// edges. Deterministic: equal inputs always produce equal output.
pub fn display_percentage(aqi: i32, raw_category: &str) -> u8 {
    // ---
    let tier = classify_category(raw_category);
    let raw = (100.0 - (f64::from(aqi) / 500.0) * 100.0).clamp(0.0, 100.0);

    let (min, max) = tier.percentage_band();
    raw.clamp(f64::from(min), f64::from(max)).round() as u8
}

// ---

// EPA-style breakpoint tables: ascending upper-inclusive bounds, first bound
// the value is <= wins; above the last bound is Hazardous. Units are the
// upstream API's native unit per pollutant (ppb for gases, µg/m³ for
// particulates); CO is compared in ppm after conversion.
const O3_PPB: [(f64, StatusTier); 5] = [
    (54.0, StatusTier::Good),
    (70.0, StatusTier::Moderate),
    (85.0, StatusTier::UnhealthyForSensitive),
    (105.0, StatusTier::Unhealthy),
    (200.0, StatusTier::VeryUnhealthy),
];

const CO_PPM: [(f64, StatusTier); 5] = [
    (4.4, StatusTier::Good),
    (9.4, StatusTier::Moderate),
    (12.4, StatusTier::UnhealthyForSensitive),
    (15.4, StatusTier::Unhealthy),
    (30.4, StatusTier::VeryUnhealthy),
];

const PM25_UGM3: [(f64, StatusTier); 5] = [
    (12.0, StatusTier::Good),
    (35.4, StatusTier::Moderate),
    (55.4, StatusTier::UnhealthyForSensitive),
    (150.4, StatusTier::Unhealthy),
    (250.4, StatusTier::VeryUnhealthy),
];

const PM10_UGM3: [(f64, StatusTier); 5] = [
    (54.0, StatusTier::Good),
    (154.0, StatusTier::Moderate),
    (254.0, StatusTier::UnhealthyForSensitive),
    (354.0, StatusTier::Unhealthy),
    (424.0, StatusTier::VeryUnhealthy),
];

const NO2_PPB: [(f64, StatusTier); 5] = [
    (53.0, StatusTier::Good),
    (100.0, StatusTier::Moderate),
    (360.0, StatusTier::UnhealthyForSensitive),
    (649.0, StatusTier::Unhealthy),
    (1249.0, StatusTier::VeryUnhealthy),
];

const SO2_PPB: [(f64, StatusTier); 5] = [
    (35.0, StatusTier::Good),
    (75.0, StatusTier::Moderate),
    (185.0, StatusTier::UnhealthyForSensitive),
    (304.0, StatusTier::Unhealthy),
    (604.0, StatusTier::VeryUnhealthy),
];

/// Classify a single pollutant concentration into a [`StatusTier`].
///
/// `concentration` is expected in the upstream API's native unit; the CO
/// value arrives in ppb and is converted to ppm before the table lookup.
/// Negative inputs are treated as zero.
pub fn classify_pollutant(code: PollutantCode, concentration: f64) -> StatusTier {
    // ---
    let value = concentration.max(0.0);

    let (value, table) = match code {
        PollutantCode::O3 => (value, &O3_PPB),
        PollutantCode::Co => (value / 1000.0, &CO_PPM), // ppb → ppm
        PollutantCode::Pm25 => (value, &PM25_UGM3),
        PollutantCode::Pm10 => (value, &PM10_UGM3),
        PollutantCode::No2 => (value, &NO2_PPB),
        PollutantCode::So2 => (value, &SO2_PPB),
    };

    for (upper_bound, tier) in table {
        if value <= *upper_bound {
            return *tier;
        }
    }
    StatusTier::Hazardous
}

/// String-code front end for [`classify_pollutant`]; an unrecognized code
/// yields [`StatusTier::Unknown`].
pub fn classify_pollutant_code(code: &str, concentration: f64) -> StatusTier {
    // ---
    match code.parse::<PollutantCode>() {
        Ok(code) => classify_pollutant(code, concentration),
        Err(()) => StatusTier::Unknown,
    }
}

/// Round a concentration to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---

/// RGB triple with each channel normalized to `[0, 1]`, as delivered by the
/// upstream conditions endpoint. Any channel may be absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NormalizedColor {
    // ---
    pub red: Option<f64>,
    pub green: Option<f64>,
    pub blue: Option<f64>,
}

impl NormalizedColor {
    fn is_empty(&self) -> bool {
        self.red.is_none() && self.green.is_none() && self.blue.is_none()
    }
}

/// Render an upstream normalized color as an uppercase `#RRGGBB` string.
///
/// A missing triple, or one with every channel absent, falls back to the
/// default gray. Present channels are clamped to `[0, 1]` before scaling;
/// absent channels render as `00`.
pub fn hex_from_normalized(color: Option<&NormalizedColor>) -> String {
    // ---
    let Some(color) = color.filter(|c| !c.is_empty()) else {
        return DEFAULT_COLOR.to_string();
    };

    let to_byte = |channel: Option<f64>| -> u8 {
        match channel {
            Some(c) if c.is_finite() => (c.clamp(0.0, 1.0) * 255.0).round() as u8,
            _ => 0,
        }
    };

    format!(
        "#{:02X}{:02X}{:02X}",
        to_byte(color.red),
        to_byte(color.green),
        to_byte(color.blue)
    )
}

/// Gradient color for a display percentage, used when the upstream supplies
/// no color of its own. Highest threshold met wins.
pub fn hex_for_percentage(percentage: u8) -> &'static str {
    // ---
    match percentage {
        85..=u8::MAX => "#4CAF50", // green
        60..=84 => "#8BC34A",      // light green
        40..=59 => "#FFC107",      // yellow
        20..=39 => "#FF9800",      // orange
        5..=19 => "#F44336",       // red
        _ => "#8E24AA",            // purple
    }
}

/// Fixed advisory sentence for a status tier.
pub fn recommendation_for(tier: StatusTier) -> &'static str {
    // ---
    match tier {
        StatusTier::Good => "Air quality is excellent. Perfect for outdoor activities!",
        StatusTier::Moderate => {
            "Air quality is acceptable for most people. Sensitive individuals \
             should consider limiting outdoor activities."
        }
        StatusTier::Low => {
            "Air quality is slightly declining. Sensitive individuals may \
             experience mild discomfort outdoors."
        }
        StatusTier::UnhealthyForSensitive => {
            "Sensitive groups should avoid outdoor activities. Others can \
             enjoy outdoor activities with caution."
        }
        StatusTier::Unhealthy => {
            "Everyone should limit outdoor activities, especially strenuous exercise."
        }
        StatusTier::VeryUnhealthy => "Avoid outdoor activities. Stay indoors with windows closed.",
        StatusTier::Hazardous => {
            "Health warning! Avoid all outdoor activities. Emergency conditions."
        }
        StatusTier::Unknown => {
            "Air quality data unavailable. Check local conditions before outdoor activities."
        }
    }
}

// ---

/// Static reference information for a pollutant, served by the
/// `/pollutants/info` routes.
#[derive(Debug, Clone, Serialize)]
pub struct PollutantInfo {
    // ---
    pub code: &'static str,
    pub display_name: &'static str,
    pub full_name: &'static str,
    pub units: &'static str,
    pub description: &'static str,
    pub sources: &'static str,
    pub health_effects: &'static str,
}

/// Look up the static reference entry for a pollutant.
pub fn pollutant_info(code: PollutantCode) -> &'static PollutantInfo {
    // ---
    match code {
        PollutantCode::Pm25 => &PollutantInfo {
            code: "pm25",
            display_name: "PM2.5",
            full_name: "Fine Particulate Matter (<2.5µm)",
            units: "µg/m³",
            description: "PM2.5 refers to fine inhalable particles with diameters that are \
                          generally 2.5 micrometers and smaller. They can penetrate deep into \
                          the lungs and even enter the bloodstream.",
            sources: "Vehicle exhaust, industrial emissions, residential wood burning, and \
                      open fires.",
            health_effects: "Long-term exposure can cause asthma, heart disease, stroke, and \
                             lung cancer. Short-term exposure may cause coughing, irritation, \
                             and difficulty breathing.",
        },
        PollutantCode::Pm10 => &PollutantInfo {
            code: "pm10",
            display_name: "PM10",
            full_name: "Inhalable Particulate Matter (<10µm)",
            units: "µg/m³",
            description: "PM10 are inhalable particles with diameters of 10 micrometers and \
                          smaller. These are larger than PM2.5 but still pose health risks.",
            sources: "Road dust, construction sites, agricultural activities, and industrial \
                      processes.",
            health_effects: "Can irritate the eyes, nose, and throat, and worsen conditions \
                             like asthma and bronchitis.",
        },
        PollutantCode::O3 => &PollutantInfo {
            code: "o3",
            display_name: "O₃",
            full_name: "Ozone",
            units: "ppb",
            description: "Ozone at ground level is formed when sunlight reacts with pollutants \
                          such as nitrogen oxides (NOx) and volatile organic compounds (VOCs).",
            sources: "Formed from vehicle emissions, fuel vapors, and chemical solvents \
                      reacting in sunlight.",
            health_effects: "Exposure can cause chest pain, coughing, throat irritation, and \
                             worsen respiratory diseases like asthma.",
        },
        PollutantCode::Co => &PollutantInfo {
            code: "co",
            display_name: "CO",
            full_name: "Carbon Monoxide",
            units: "ppb",
            description: "Carbon monoxide is a colorless, odorless gas produced by incomplete \
                          combustion of carbon-containing fuels.",
            sources: "Motor vehicles, generators, and burning of wood, coal, or other fuels.",
            health_effects: "Reduces oxygen delivery to the body's organs and tissues; high \
                             exposure can be fatal. Low-level exposure can cause dizziness \
                             and headaches.",
        },
        PollutantCode::No2 => &PollutantInfo {
            code: "no2",
            display_name: "NO₂",
            full_name: "Nitrogen Dioxide",
            units: "ppb",
            description: "Nitrogen dioxide is a reddish-brown gas that forms from combustion \
                          processes, especially in vehicles and power plants.",
            sources: "Car and truck exhaust, industrial facilities, and off-road equipment.",
            health_effects: "Can irritate airways and increase susceptibility to respiratory \
                             infections and asthma attacks.",
        },
        PollutantCode::So2 => &PollutantInfo {
            code: "so2",
            display_name: "SO₂",
            full_name: "Sulfur Dioxide",
            units: "ppb",
            description: "Sulfur dioxide is a gas produced by the burning of fossil fuels that \
                          contain sulfur, such as coal and oil.",
            sources: "Coal-burning power plants, metal smelting, and volcanoes.",
            health_effects: "Short-term exposure can cause throat and eye irritation, coughing, \
                             and difficulty breathing, especially for people with asthma.",
        },
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_category_keywords_case_insensitive() {
        // ---
        assert_eq!(
            classify_category("UNHEALTHY FOR SENSITIVE GROUPS"),
            StatusTier::UnhealthyForSensitive
        );
        assert_eq!(
            classify_category("unhealthy for sensitive groups"),
            StatusTier::UnhealthyForSensitive
        );
        assert_eq!(classify_category("Good air quality"), StatusTier::Good);
        assert_eq!(classify_category("Excellent"), StatusTier::Good);
        assert_eq!(classify_category("Moderate"), StatusTier::Moderate);
        assert_eq!(classify_category("Low"), StatusTier::Low);
        assert_eq!(classify_category("Hazardous"), StatusTier::Hazardous);
    }

    #[test]
    fn test_category_substring_superset_ordering() {
        // ---
        // "very unhealthy" and "sensitive groups" both contain "unhealthy";
        // the more specific rule must win.
        assert_eq!(classify_category("Very Unhealthy"), StatusTier::VeryUnhealthy);
        assert_eq!(classify_category("Unhealthy"), StatusTier::Unhealthy);
        assert_eq!(
            classify_category("Unhealthy for sensitive groups"),
            StatusTier::UnhealthyForSensitive
        );
    }

    #[test]
    fn test_category_fallback_and_empty() {
        // ---
        assert_eq!(classify_category(""), StatusTier::Unknown);
        assert_eq!(classify_category("   "), StatusTier::Unknown);
        // Unrecognized phrasing falls through to the first-token match.
        assert_eq!(classify_category("Poor visibility"), StatusTier::Unknown);
    }

    #[test]
    fn test_percentage_stays_in_band() {
        // ---
        // AQI 45 with a Good category: raw score 91, inside [90, 98].
        let p = display_percentage(45, "Good");
        assert!((90..=98).contains(&p), "got {p}");

        // AQI 250 with Very Unhealthy: raw score 50 clamps down into [10, 29].
        let p = display_percentage(250, "Very Unhealthy");
        assert!((10..=29).contains(&p), "got {p}");

        // A Good category with an absurdly high AQI still floors at 90.
        assert_eq!(display_percentage(500, "Good"), 90);

        // Hazardous band caps at 9 even for a low AQI.
        assert!(display_percentage(10, "Hazardous") <= 9);
    }

    #[test]
    fn test_percentage_band_exhaustive_sweep() {
        // ---
        let cases = [
            ("Good", StatusTier::Good),
            ("Moderate", StatusTier::Moderate),
            ("Unhealthy for Sensitive Groups", StatusTier::UnhealthyForSensitive),
            ("Unhealthy", StatusTier::Unhealthy),
            ("Very Unhealthy", StatusTier::VeryUnhealthy),
            ("Hazardous", StatusTier::Hazardous),
        ];
        for (category, tier) in cases {
            let (min, max) = tier.percentage_band();
            for aqi in (0..=500).step_by(25) {
                let p = display_percentage(aqi, category);
                assert!(
                    (min..=max).contains(&p),
                    "{category} aqi={aqi} gave {p}, outside [{min}, {max}]"
                );
            }
        }
    }

    #[test]
    fn test_percentage_degrades_gracefully_outside_range() {
        // ---
        // Negative or >500 AQI values saturate instead of erroring.
        assert_eq!(display_percentage(-50, "Good"), 98);
        assert_eq!(display_percentage(99_999, "Hazardous"), 0);
    }

    #[test]
    fn test_co_ppb_to_ppm_conversion() {
        // ---
        // 9400 ppb → 9.4 ppm, exactly on the Moderate upper bound (inclusive).
        assert_eq!(
            classify_pollutant(PollutantCode::Co, 9400.0),
            StatusTier::Moderate
        );
        assert_eq!(
            classify_pollutant(PollutantCode::Co, 9401.0),
            StatusTier::UnhealthyForSensitive
        );
        assert_eq!(classify_pollutant(PollutantCode::Co, 4400.0), StatusTier::Good);
    }

    #[test]
    fn test_pm25_boundary_exclusivity() {
        // ---
        assert_eq!(classify_pollutant(PollutantCode::Pm25, 12.0), StatusTier::Good);
        assert_eq!(
            classify_pollutant(PollutantCode::Pm25, 12.01),
            StatusTier::Moderate
        );
        assert_eq!(
            classify_pollutant(PollutantCode::Pm25, 250.5),
            StatusTier::Hazardous
        );
    }

    #[test]
    fn test_gas_breakpoints() {
        // ---
        assert_eq!(classify_pollutant(PollutantCode::O3, 54.0), StatusTier::Good);
        assert_eq!(classify_pollutant(PollutantCode::O3, 71.0), StatusTier::UnhealthyForSensitive);
        assert_eq!(classify_pollutant(PollutantCode::O3, 201.0), StatusTier::Hazardous);
        assert_eq!(classify_pollutant(PollutantCode::No2, 100.0), StatusTier::Moderate);
        assert_eq!(classify_pollutant(PollutantCode::So2, 605.0), StatusTier::Hazardous);
        assert_eq!(classify_pollutant(PollutantCode::Pm10, 55.0), StatusTier::Moderate);
    }

    #[test]
    fn test_negative_concentration_treated_as_zero() {
        // ---
        assert_eq!(classify_pollutant(PollutantCode::Pm25, -3.0), StatusTier::Good);
    }

    #[test]
    fn test_unrecognized_pollutant_code() {
        // ---
        assert_eq!(classify_pollutant_code("nox", 10.0), StatusTier::Unknown);
        assert_eq!(classify_pollutant_code("", 10.0), StatusTier::Unknown);
        assert_eq!(classify_pollutant_code("PM25", 10.0), StatusTier::Good);
    }

    #[test]
    fn test_hex_from_normalized_defaults() {
        // ---
        assert_eq!(hex_from_normalized(None), DEFAULT_COLOR);
        assert_eq!(
            hex_from_normalized(Some(&NormalizedColor::default())),
            DEFAULT_COLOR
        );
    }

    #[test]
    fn test_hex_from_normalized_channels() {
        // ---
        let red = NormalizedColor {
            red: Some(1.0),
            green: Some(0.0),
            blue: Some(0.0),
        };
        assert_eq!(hex_from_normalized(Some(&red)), "#FF0000");

        // Missing channels default to zero once any channel is present.
        let green_only = NormalizedColor {
            green: Some(1.0),
            ..Default::default()
        };
        assert_eq!(hex_from_normalized(Some(&green_only)), "#00FF00");
    }

    #[test]
    fn test_hex_from_normalized_clamps_out_of_range() {
        // ---
        let wild = NormalizedColor {
            red: Some(1.5),
            green: Some(-1.0),
            blue: Some(0.5),
        };
        assert_eq!(hex_from_normalized(Some(&wild)), "#FF0080");

        let nan = NormalizedColor {
            red: Some(f64::NAN),
            green: Some(0.5),
            blue: None,
        };
        assert_eq!(hex_from_normalized(Some(&nan)), "#008000");
    }

    #[test]
    fn test_percentage_color_ladder() {
        // ---
        assert_eq!(hex_for_percentage(100), "#4CAF50");
        assert_eq!(hex_for_percentage(85), "#4CAF50");
        assert_eq!(hex_for_percentage(60), "#8BC34A");
        assert_eq!(hex_for_percentage(40), "#FFC107");
        assert_eq!(hex_for_percentage(20), "#FF9800");
        assert_eq!(hex_for_percentage(5), "#F44336");
        assert_eq!(hex_for_percentage(0), "#8E24AA");
    }

    #[test]
    fn test_no_orphan_tiers() {
        // ---
        // Every tier a pollutant classification can produce has a dedicated
        // recommendation, distinct from the Unknown fallback.
        let generic = recommendation_for(StatusTier::Unknown);
        for code in PollutantCode::ALL {
            for value in [0.0, 50.0, 120.0, 400.0, 1500.0, 1e6] {
                let tier = classify_pollutant(code, value);
                assert_ne!(tier, StatusTier::Unknown);
                assert_ne!(recommendation_for(tier), generic, "{code} at {value}");
            }
        }
    }

    #[test]
    fn test_tier_ordering_worst_first() {
        // ---
        let mut tiers = vec![StatusTier::Good, StatusTier::Hazardous, StatusTier::Moderate];
        tiers.sort();
        assert_eq!(tiers[0], StatusTier::Hazardous);
        assert!(StatusTier::VeryUnhealthy < StatusTier::Unhealthy);
        assert!(StatusTier::Good < StatusTier::Unknown);
    }

    #[test]
    fn test_round2() {
        // ---
        assert_eq!(round2(12.345), 12.35);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_pollutant_info_units_match_tables() {
        // ---
        assert_eq!(pollutant_info(PollutantCode::Pm25).units, "µg/m³");
        assert_eq!(pollutant_info(PollutantCode::O3).units, "ppb");
        // CO is reported in ppb by the upstream even though the breakpoint
        // table works in ppm.
        assert_eq!(pollutant_info(PollutantCode::Co).units, "ppb");
    }
}
