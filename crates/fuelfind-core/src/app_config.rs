pub const DEFAULT_FEED_URL: &str = "https://integracion.copec.cl/stations";
pub const DEFAULT_FEED_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_USER_AGENT: &str = "fuelfind/0.1 (station-search)";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Station feed endpoint, without the catalog filter query string.
    pub feed_url: String,
    pub feed_timeout_secs: u64,
    pub user_agent: String,
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            feed_timeout_secs: DEFAULT_FEED_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
