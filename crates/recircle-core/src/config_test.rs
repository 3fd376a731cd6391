use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("GEMINI_API_KEY", "test-key");
    m
}

#[test]
fn build_app_config_fails_without_classifier_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GEMINI_API_KEY"),
        "expected MissingEnvVar(GEMINI_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("RECIRCLE_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RECIRCLE_BIND_ADDR"),
        "expected InvalidEnvVar(RECIRCLE_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_unknown_environment() {
    let mut map = full_env();
    map.insert("RECIRCLE_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RECIRCLE_ENV"),
        "expected InvalidEnvVar(RECIRCLE_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_applies_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.port(), 5000);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.geodata_timeout_secs, 15);
    assert_eq!(cfg.facility_radius_m, 5000);
    assert_eq!(cfg.classifier_model, "gemini-flash-lite-latest");
    assert_eq!(cfg.upload_dir, std::path::PathBuf::from("uploads"));
}

#[test]
fn build_app_config_honors_overrides() {
    let mut map = full_env();
    map.insert("RECIRCLE_ENV", "production");
    map.insert("RECIRCLE_BIND_ADDR", "127.0.0.1:8080");
    map.insert("GEODATA_TIMEOUT_SECS", "30");
    map.insert("OVERPASS_BASE_URL", "http://localhost:9999/api/interpreter");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.port(), 8080);
    assert_eq!(cfg.geodata_timeout_secs, 30);
    assert_eq!(
        cfg.overpass_base_url,
        "http://localhost:9999/api/interpreter"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("test-key"), "{debug}");
    assert!(debug.contains("[redacted]"), "{debug}");
}
