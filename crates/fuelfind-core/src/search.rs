//! Search entry point: validate, fetch once, select, build the payload.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::distance::Coordinate;
use crate::error::SearchError;
use crate::product::Product;
use crate::response::{build_response, SearchResult};
use crate::select::{select, SearchMode};

/// Source of raw station records.
///
/// Implementations must report an unreachable feed or a body that is not a
/// list of records as an error, never as an empty list.
pub trait StationFeed {
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch_stations(
        &self,
        timeout: Duration,
    ) -> impl Future<Output = Result<Vec<Value>, Self::Error>> + Send;
}

/// Caller input for one search. `product` is the raw user string; it is
/// validated before the feed is contacted.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub lat: f64,
    pub lng: f64,
    pub product: String,
    pub mode: SearchMode,
}

/// Runs a search and folds every failure into the payload.
pub async fn search<F: StationFeed>(
    feed: &F,
    request: &SearchRequest,
    timeout: Duration,
) -> SearchResult {
    match try_search(feed, request, timeout).await {
        Ok(result) => result,
        Err(err) => {
            tracing::info!(kind = ?err.kind(), error = %err, "station search did not produce a match");
            SearchResult::from(err)
        }
    }
}

/// Same as [`search`] but surfaces the failure category as an error.
///
/// # Errors
///
/// - [`SearchError::Validation`] for an unknown product or a query point
///   that is not a finite, in-range coordinate.
/// - [`SearchError::Feed`] when the feed cannot be fetched or parsed.
/// - [`SearchError::NoResults`] when no station satisfies the criteria.
pub async fn try_search<F: StationFeed>(
    feed: &F,
    request: &SearchRequest,
    timeout: Duration,
) -> Result<SearchResult, SearchError> {
    let product = Product::from_input(&request.product)?;
    let origin = query_point(request.lat, request.lng)?;

    let stations = feed.fetch_stations(timeout).await.map_err(|e| {
        tracing::warn!(error = %e, "station feed request failed");
        SearchError::Feed {
            source: Box::new(e),
        }
    })?;

    let winner = select(&stations, origin, product, request.mode.criteria())
        .ok_or(SearchError::NoResults)?;

    tracing::debug!(
        stations = stations.len(),
        price = winner.price,
        distance_km = winner.distance_km,
        mode = ?request.mode,
        "selected station"
    );

    Ok(SearchResult::Found(build_response(
        winner.record,
        product,
        winner.distance_km,
        Some(winner.price),
    )))
}

fn query_point(lat: f64, lng: f64) -> Result<Coordinate, SearchError> {
    if !(lat.is_finite() && (-90.0..=90.0).contains(&lat)) {
        return Err(SearchError::Validation(
            "Latitud fuera de rango (-90 a 90).".to_string(),
        ));
    }
    Coordinate::new(lat, lng).ok_or_else(|| {
        SearchError::Validation("Longitud fuera de rango (-180 a 180).".to_string())
    })
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
