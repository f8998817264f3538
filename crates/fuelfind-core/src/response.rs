//! Output payloads.
//!
//! Field names follow the feed's Spanish vocabulary since the payload is
//! consumed by the same audience as the feed.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{ErrorKind, SearchError};
use crate::normalize::{has_store, station_coordinate, value_as_text};
use crate::product::Product;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreResponse {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
}

/// The selected station as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationResponse {
    pub id: String,
    #[serde(rename = "compania")]
    pub company: String,
    #[serde(rename = "direccion")]
    pub address: String,
    pub comuna: String,
    pub region: String,
    #[serde(rename = "latitud")]
    pub latitude: Option<f64>,
    #[serde(rename = "longitud")]
    pub longitude: Option<f64>,
    /// Distance from the query point in km, rounded to metres.
    #[serde(rename = "distancia_lineal")]
    pub distance_km: f64,
    #[serde(rename = "precio_producto")]
    pub price: Option<i64>,
    #[serde(rename = "tienda")]
    pub store: StoreResponse,
    #[serde(rename = "tiene_tienda")]
    pub has_store: bool,
    #[serde(rename = "producto")]
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureResponse {
    pub error: ErrorKind,
    pub message: String,
}

/// Outcome of a search: exactly one station or one failure, never both.
///
/// Serializes as `{"success": bool, "data": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Found(StationResponse),
    Failed(FailureResponse),
}

impl SearchResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<SearchError> for SearchResult {
    fn from(err: SearchError) -> Self {
        Self::Failed(FailureResponse {
            error: err.kind(),
            message: err.to_string(),
        })
    }
}

impl Serialize for SearchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SearchResult", 2)?;
        match self {
            Self::Found(station) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", station)?;
            }
            Self::Failed(failure) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("data", failure)?;
            }
        }
        state.end()
    }
}

fn round_to_metres(km: f64) -> f64 {
    (km * 1000.0).round() / 1000.0
}

/// Assembles the success payload for the winning station.
///
/// Text fields are copied verbatim and default to `""`; coordinates go
/// through the same normalization used for ranking.
#[must_use]
pub fn build_response(
    record: &Value,
    product: Product,
    distance_km: f64,
    price: Option<i64>,
) -> StationResponse {
    let coordinate = station_coordinate(record);
    let store = record.get("Tienda").filter(|v| v.is_object());
    let store_field = |key: &str| value_as_text(store.and_then(|s| s.get(key)));

    StationResponse {
        id: value_as_text(record.get("CodEs")),
        company: value_as_text(record.get("Compania")),
        address: value_as_text(record.get("Direccion")),
        comuna: value_as_text(record.get("Comuna")),
        region: value_as_text(record.get("Region")),
        latitude: coordinate.map(|c| c.lat()),
        longitude: coordinate.map(|c| c.lng()),
        distance_km: round_to_metres(distance_km),
        price,
        store: StoreResponse {
            code: store_field("CodigoTienda"),
            name: store_field("NombreTienda"),
            kind: store_field("Tipo"),
        },
        has_store: has_store(record),
        product,
    }
}
