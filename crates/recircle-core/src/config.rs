use crate::app_config::{AppConfig, Environment};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = match or_default("RECIRCLE_ENV", "development").as_str() {
        "development" => Environment::Development,
        "test" => Environment::Test,
        "production" => Environment::Production,
        other => {
            return Err(ConfigError::InvalidEnvVar {
                var: "RECIRCLE_ENV".to_string(),
                reason: format!("unknown environment '{other}'"),
            })
        }
    };

    Ok(AppConfig {
        env,
        bind_addr: parse_addr("RECIRCLE_BIND_ADDR", "0.0.0.0:5000")?,
        log_level: or_default("RECIRCLE_LOG_LEVEL", "info"),
        classifier_api_key: require("GEMINI_API_KEY")?,
        classifier_base_url: or_default(
            "GEMINI_BASE_URL",
            "https://generativelanguage.googleapis.com",
        ),
        classifier_model: or_default("GEMINI_MODEL", "gemini-flash-lite-latest"),
        classifier_timeout_secs: parse_u64("CLASSIFIER_TIMEOUT_SECS", "60")?,
        overpass_base_url: or_default(
            "OVERPASS_BASE_URL",
            "https://overpass-api.de/api/interpreter",
        ),
        geodata_timeout_secs: parse_u64("GEODATA_TIMEOUT_SECS", "15")?,
        facility_radius_m: parse_u32("FACILITY_RADIUS_M", "5000")?,
        upload_dir: PathBuf::from(or_default("RECIRCLE_UPLOAD_DIR", "uploads")),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
