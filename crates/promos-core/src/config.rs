use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_SHEET_RANGE: &str = "Sheet1!A:D";

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

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let parse = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let spreadsheet_id = require("PROMOS_SPREADSHEET_ID")?;
    let sheet_range = or_default("PROMOS_SHEET_RANGE", DEFAULT_SHEET_RANGE);
    let sheets_base_url = or_default("PROMOS_SHEETS_BASE_URL", DEFAULT_SHEETS_BASE_URL);
    let sheets_api_key = optional("PROMOS_SHEETS_API_KEY");
    let sheets_access_token = optional("PROMOS_SHEETS_ACCESS_TOKEN");

    let env = parse_environment(&or_default("PROMOS_ENV", "development"));
    let bind_addr = parse("PROMOS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PROMOS_LOG_LEVEL", "info");

    let sheets_request_timeout_secs = parse_u64("PROMOS_SHEETS_REQUEST_TIMEOUT_SECS", "30")?;
    let sheets_max_retries = parse_u32("PROMOS_SHEETS_MAX_RETRIES", "3")?;
    let sheets_retry_backoff_base_ms = parse_u64("PROMOS_SHEETS_RETRY_BACKOFF_BASE_MS", "500")?;

    let rate_limit_max_requests = parse_usize("PROMOS_RATE_LIMIT_MAX_REQUESTS", "120")?;
    let rate_limit_window_secs = parse_u64("PROMOS_RATE_LIMIT_WINDOW_SECS", "60")?;
    let api_keys = parse_api_keys(&or_default("PROMOS_API_KEYS", ""));

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        spreadsheet_id,
        sheet_range,
        sheets_base_url,
        sheets_api_key,
        sheets_access_token,
        sheets_request_timeout_secs,
        sheets_max_retries,
        sheets_retry_backoff_base_ms,
        rate_limit_max_requests,
        rate_limit_window_secs,
        api_keys,
    })
}

/// Splits a comma-separated token list, dropping blanks and duplicates.
fn parse_api_keys(raw: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for key in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_owned());
        }
    }
    keys
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
