//! HTTP client for the Copec station catalog.
//!
//! Wraps `reqwest` with feed-specific error handling. Every failure mode
//! (transport, status, body, shape) is a distinct [`FeedError`] so callers
//! can log precisely while still treating them all as "feed unavailable".

use std::time::Duration;

use fuelfind_core::app_config::DEFAULT_FEED_URL;
use fuelfind_core::StationFeed;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::FeedError;

/// Catalog filters sent with every request. `-1` means "all" for each
/// dimension, so one request returns the whole national station list.
const CATALOG_FILTERS: [(&str, &str); 4] = [
    ("codEs", "-1"),
    ("company", "-1"),
    ("region", "-1"),
    ("comuna", "-1"),
];

/// Client for the station feed.
///
/// Use [`FeedClient::new`] for production or [`FeedClient::with_endpoint`]
/// to point at a mock server in tests.
pub struct FeedClient {
    client: Client,
    endpoint: Url,
}

impl FeedClient {
    /// Creates a client pointed at the production feed.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str) -> Result<Self, FeedError> {
        Self::with_endpoint(DEFAULT_FEED_URL, user_agent)
    }

    /// Creates a client for a custom endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FeedError::InvalidUrl`] if `endpoint`
    /// is not a valid URL.
    pub fn with_endpoint(endpoint: &str, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let trimmed = endpoint.trim().trim_end_matches('/');
        let endpoint = Url::parse(trimmed).map_err(|e| FeedError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, endpoint })
    }

    /// Fetches the raw station records.
    ///
    /// Records are returned untouched; malformed entries are dealt with
    /// during selection, not here.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] on network failure or when `timeout` elapses.
    /// - [`FeedError::UnexpectedStatus`] on a non-2xx status.
    /// - [`FeedError::Deserialize`] if the body is not JSON.
    /// - [`FeedError::UnexpectedShape`] if the body is not a JSON array.
    pub async fn get_stations(&self, timeout: Duration) -> Result<Vec<Value>, FeedError> {
        let url = self.build_url();
        let body = self.request_json(&url, timeout).await?;

        match body {
            Value::Array(stations) => {
                tracing::debug!(count = stations.len(), "fetched station feed");
                Ok(stations)
            }
            other => Err(FeedError::UnexpectedShape {
                url: url.to_string(),
                found: json_type_name(&other),
            }),
        }
    }

    /// Builds the request URL with the catalog filters as query parameters.
    fn build_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in CATALOG_FILTERS {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
    async fn request_json(&self, url: &Url, timeout: Duration) -> Result<Value, FeedError> {
        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FeedError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

impl StationFeed for FeedClient {
    type Error = FeedError;

    async fn fetch_stations(&self, timeout: Duration) -> Result<Vec<Value>, FeedError> {
        self.get_stations(timeout).await
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
