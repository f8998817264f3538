//! Typed field extraction from raw station records.
//!
//! Feed records are kept as [`serde_json::Value`] because the upstream feed
//! is loosely typed: coordinates arrive as numbers or as strings with comma
//! decimals, prices as integers or padded strings, and any field may be
//! missing or null. Every function here is total. "Cannot determine" is
//! `None` or `false`, never an error.

use serde_json::Value;

use crate::distance::Coordinate;
use crate::product::Product;

/// Reads `primary`, falling back to `fallback` when the first key is
/// missing, null, or unparseable.
fn lenient_f64(record: &Value, primary: &str, fallback: &str) -> Option<f64> {
    record
        .get(primary)
        .and_then(value_as_f64)
        .or_else(|| record.get(fallback).and_then(value_as_f64))
}

/// Coerces a JSON number or numeric string (`"-33,45"`, `" -70.66 "`) into a
/// finite `f64`.
fn value_as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Coerces a JSON integer or an integer string with surrounding whitespace.
///
/// Fractional values are rejected rather than truncated.
fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Renders a field as text the way the feed's loose typing expects.
///
/// Null, `false`, zero and empty containers read as an empty string so that
/// placeholder values never count as real data.
#[must_use]
pub fn value_as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => String::new(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => {
            if n.as_f64() == Some(0.0) {
                String::new()
            } else {
                n.to_string()
            }
        }
        Some(Value::Array(items)) if items.is_empty() => String::new(),
        Some(Value::Object(map)) if map.is_empty() => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Extracts the station's position, accepting `Latitud`/`latitud` and
/// `Longitud`/`longitud`.
///
/// Returns `None` when either axis is missing, non-numeric, non-finite, or
/// outside the valid latitude/longitude range.
#[must_use]
pub fn station_coordinate(record: &Value) -> Option<Coordinate> {
    let lat = lenient_f64(record, "Latitud", "latitud")?;
    let lng = lenient_f64(record, "Longitud", "longitud")?;
    Coordinate::new(lat, lng)
}

/// Resolves the station's integer price for `product`.
///
/// The first `Prices` entry whose `Producto` matches the product label
/// (case-insensitive, trimmed) decides the outcome: an unusable `Precio`
/// on that entry yields `None` even if a later entry would have matched.
#[must_use]
pub fn station_price(record: &Value, product: Product) -> Option<i64> {
    let prices = record.get("Prices")?.as_array()?;
    let label = product.label().to_lowercase();

    let entry = prices.iter().filter(|item| item.is_object()).find(|item| {
        value_as_text(item.get("Producto")).trim().to_lowercase() == label
    })?;

    entry.get("Precio").and_then(value_as_i64)
}

/// `true` when the station has a convenience store: the `Tienda` object
/// exists and at least one of its code, name or type is non-blank.
#[must_use]
pub fn has_store(record: &Value) -> bool {
    let Some(store) = record.get("Tienda").filter(|v| v.is_object()) else {
        return false;
    };

    ["CodigoTienda", "NombreTienda", "Tipo"]
        .iter()
        .any(|key| !value_as_text(store.get(*key)).trim().is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
