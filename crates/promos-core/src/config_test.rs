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
    m.insert("PROMOS_SPREADSHEET_ID", "1AbCdEfGhIjKlMnOp");
    m
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_fails_without_spreadsheet_id() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PROMOS_SPREADSHEET_ID"),
        "expected MissingEnvVar(PROMOS_SPREADSHEET_ID), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_spreadsheet_id_as_missing() {
    let mut map = HashMap::new();
    map.insert("PROMOS_SPREADSHEET_ID", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("PROMOS_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROMOS_BIND_ADDR"),
        "expected InvalidEnvVar(PROMOS_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.spreadsheet_id, "1AbCdEfGhIjKlMnOp");
    assert_eq!(cfg.sheet_range, "Sheet1!A:D");
    assert_eq!(cfg.sheets_base_url, "https://sheets.googleapis.com");
    assert!(cfg.sheets_api_key.is_none());
    assert!(cfg.sheets_access_token.is_none());
    assert_eq!(cfg.sheets_request_timeout_secs, 30);
    assert_eq!(cfg.sheets_max_retries, 3);
    assert_eq!(cfg.sheets_retry_backoff_base_ms, 500);
    assert_eq!(cfg.rate_limit_max_requests, 120);
    assert_eq!(cfg.rate_limit_window_secs, 60);
    assert!(cfg.api_keys.is_empty());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = full_env();
    map.insert("PROMOS_ENV", "production");
    map.insert("PROMOS_SHEET_RANGE", "Promos!A2:D");
    map.insert("PROMOS_SHEETS_API_KEY", "k-123");
    map.insert("PROMOS_SHEETS_MAX_RETRIES", "0");
    map.insert("PROMOS_RATE_LIMIT_MAX_REQUESTS", "10");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.sheet_range, "Promos!A2:D");
    assert_eq!(cfg.sheets_api_key.as_deref(), Some("k-123"));
    assert_eq!(cfg.sheets_max_retries, 0);
    assert_eq!(cfg.rate_limit_max_requests, 10);
}

#[test]
fn build_app_config_ignores_blank_api_key() {
    let mut map = full_env();
    map.insert("PROMOS_SHEETS_API_KEY", "");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config");
    assert!(cfg.sheets_api_key.is_none());
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = full_env();
    map.insert("PROMOS_SHEETS_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROMOS_SHEETS_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PROMOS_SHEETS_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn app_config_debug_redacts_credentials() {
    let mut map = full_env();
    map.insert("PROMOS_SHEETS_API_KEY", "super-secret-key");
    map.insert("PROMOS_SHEETS_ACCESS_TOKEN", "ya29.secret-token");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config");
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(!debug.contains("ya29.secret-token"));
    assert!(debug.contains("[redacted]"));
}

#[test]
fn build_app_config_splits_api_keys() {
    let mut map = full_env();
    map.insert("PROMOS_API_KEYS", " alpha , beta,, alpha ");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config");
    assert_eq!(cfg.api_keys, vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn app_config_debug_hides_api_keys() {
    let mut map = full_env();
    map.insert("PROMOS_API_KEYS", "server-token-1");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config");
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("server-token-1"));
    assert!(debug.contains("[1 redacted]"));
}
