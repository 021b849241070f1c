use crate::app_config::{AppConfig, DEFAULT_MAX_PAGES};
use crate::ConfigError;

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
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
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

    let proxy_token = require("REVSCAN_PROXY_TOKEN")?;
    let proxy_base_url = or_default("REVSCAN_PROXY_BASE_URL", "http://api.scrape.do");
    let proxy_geo_code = or_default("REVSCAN_PROXY_GEO_CODE", "us");

    let request_timeout_secs = parse_u64("REVSCAN_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("REVSCAN_USER_AGENT", "revscan/0.1 (review-sentiment)");

    let max_pages = parse_u32("REVSCAN_MAX_PAGES", &DEFAULT_MAX_PAGES.to_string())?;
    if max_pages == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "REVSCAN_MAX_PAGES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let page_delay_ms = parse_u64("REVSCAN_PAGE_DELAY_MS", "1000")?;

    let vectorizer_path = PathBuf::from(or_default(
        "REVSCAN_VECTORIZER_PATH",
        "./models/tfidf_vectorizer.json",
    ));
    let model_path = PathBuf::from(or_default(
        "REVSCAN_MODEL_PATH",
        "./models/logistic_regression.json",
    ));
    let categories_path = PathBuf::from(or_default(
        "REVSCAN_CATEGORIES_PATH",
        "./config/categories.yaml",
    ));
    let log_level = or_default("REVSCAN_LOG_LEVEL", "info");

    Ok(AppConfig {
        proxy_base_url,
        proxy_token,
        proxy_geo_code,
        request_timeout_secs,
        user_agent,
        max_pages,
        page_delay_ms,
        vectorizer_path,
        model_path,
        categories_path,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
