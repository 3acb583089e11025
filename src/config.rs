//! Configuration loader for the `airhealth-backend` service.
//!
//! This module centralizes all runtime configuration values and their
//! defaults, loading from environment variables (with optional `.env` file
//! support provided by the caller). By consolidating configuration logic
//! here, we avoid scattering `env::var` calls throughout the codebase.

use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u32 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse a required string environment variable.
macro_rules! require_env {
    ($var_name:expr) => {
        env::var($var_name)
            .map_err(|_| anyhow!("{} must be set in .env or environment", $var_name))?
    };
}

/// Read an optional string environment variable with a default value.
macro_rules! env_or {
    ($var_name:expr, $default:expr) => {
        env::var($var_name).unwrap_or_else(|_| $default.to_string())
    };
}

const DEFAULT_CONDITIONS_URL: &str =
    "https://airquality.googleapis.com/v1/currentConditions:lookup";
const DEFAULT_EXPO_PUSH_URL: &str = "https://exp.host/--/api/v2/push/send";

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent
/// configuration snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// PostgreSQL connection string.
    pub db_url: String,

    /// Maximum number of database connections in the pool.
    pub db_pool_max: u32,

    /// Air-quality conditions endpoint (Google Air Quality API shape).
    pub conditions_url: String,

    /// API key appended to conditions requests.
    pub air_quality_api_key: String,

    /// Expo push gateway endpoint.
    pub expo_push_url: String,

    /// TCP port the HTTP server binds to.
    pub port: u32,
}

/// Load configuration from environment variables with defaults.
///
/// Required:
/// - `DATABASE_URL` – PostgreSQL connection string
/// - `GOOGLE_AQ_API_KEY` – key for the air-quality conditions endpoint
///
/// Optional:
/// - `AIR_QUALITY_API_URL` – conditions endpoint (default: Google's
///   `currentConditions:lookup`)
/// - `EXPO_PUSH_URL` – push gateway endpoint (default: `exp.host`)
/// - `DB_POOL_MAX` – max DB connections (default: 5)
/// - `PORT` – HTTP listen port (default: 4000)
///
/// Returns an error if any required variable is missing or invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let db_url = require_env!("DATABASE_URL");
    let air_quality_api_key = require_env!("GOOGLE_AQ_API_KEY");
    let conditions_url = env_or!("AIR_QUALITY_API_URL", DEFAULT_CONDITIONS_URL);
    let expo_push_url = env_or!("EXPO_PUSH_URL", DEFAULT_EXPO_PUSH_URL);
    let db_pool_max = parse_env_u32!("DB_POOL_MAX", 5);
    let port = parse_env_u32!("PORT", 4000);

    Ok(Config {
        db_url,
        db_pool_max,
        conditions_url,
        air_quality_api_key,
        expo_push_url,
        port,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// Masks sensitive information (database password, API key) while
    /// showing all configuration values that were loaded.
    pub fn log_config(&self) {
        // ---
        // Mask the password in the database URL for security
        let masked_db_url = if let Some(at_pos) = self.db_url.rfind('@') {
            if let Some(colon_pos) = self.db_url[..at_pos].rfind(':') {
                format!(
                    "{}:****{}",
                    &self.db_url[..colon_pos],
                    &self.db_url[at_pos..]
                )
            } else {
                self.db_url.clone()
            }
        } else {
            self.db_url.clone()
        };

        let masked_key = mask_key(&self.air_quality_api_key);

        tracing::info!("Configuration loaded:");
        tracing::info!("  DATABASE_URL        : {}", masked_db_url);
        tracing::info!("  AIR_QUALITY_API_URL : {}", self.conditions_url);
        tracing::info!("  GOOGLE_AQ_API_KEY   : {}", masked_key);
        tracing::info!("  EXPO_PUSH_URL       : {}", self.expo_push_url);
        tracing::info!("  DB_POOL_MAX         : {}", self.db_pool_max);
        tracing::info!("  PORT                : {}", self.port);
    }
}

/// Show only the first four characters of an API key.
fn mask_key(key: &str) -> String {
    // ---
    if key.len() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", &key[..4])
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_mask_key() {
        // ---
        assert_eq!(mask_key("AIzaSyExample"), "AIza****");
        assert_eq!(mask_key("abc"), "****");
        assert_eq!(mask_key(""), "****");
    }
}
