use thiserror::Error;

/// Errors returned by the station feed client.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body was JSON but not a list of station records.
    #[error("unexpected feed shape from {url}: expected an array, got {found}")]
    UnexpectedShape { url: String, found: &'static str },

    #[error("invalid feed URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
