use crate::app_config::{
    AppConfig, DEFAULT_FEED_TIMEOUT_SECS, DEFAULT_FEED_URL, DEFAULT_LOG_LEVEL, DEFAULT_USER_AGENT,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so tests can feed a plain `HashMap` instead of mutating the process env.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        let raw = or_default(var, &default.to_string());
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let feed_url = or_default("FUELFIND_FEED_URL", DEFAULT_FEED_URL);
    if !(feed_url.starts_with("http://") || feed_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "FUELFIND_FEED_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{feed_url}'"),
        });
    }

    let feed_timeout_secs = parse_u64("FUELFIND_FEED_TIMEOUT_SECS", DEFAULT_FEED_TIMEOUT_SECS)?;
    if feed_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FUELFIND_FEED_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    let user_agent = or_default("FUELFIND_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("FUELFIND_LOG_LEVEL", DEFAULT_LOG_LEVEL);

    Ok(AppConfig {
        feed_url,
        feed_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
