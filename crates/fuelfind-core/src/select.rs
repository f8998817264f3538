//! Candidate filtering and ranking.

use serde_json::Value;

use crate::distance::{distance_km, Coordinate};
use crate::normalize::{has_store, station_coordinate, station_price};
use crate::product::Product;

/// The four supported search cases. Every case ranks by distance; the
/// variants only differ in which filters run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Nearest,
    NearestCheapest,
    NearestWithStore,
    NearestWithStoreCheapest,
}

impl SearchMode {
    /// Resolves the optional store/cheapest flags. Neither flag means
    /// nearest only.
    #[must_use]
    pub fn from_flags(require_store: bool, cheapest: bool) -> Self {
        match (require_store, cheapest) {
            (false, false) => Self::Nearest,
            (false, true) => Self::NearestCheapest,
            (true, false) => Self::NearestWithStore,
            (true, true) => Self::NearestWithStoreCheapest,
        }
    }

    /// Maps the interactive menu choice (`"1"`..`"4"`).
    #[must_use]
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Nearest),
            "2" => Some(Self::NearestCheapest),
            "3" => Some(Self::NearestWithStore),
            "4" => Some(Self::NearestWithStoreCheapest),
            _ => None,
        }
    }

    #[must_use]
    pub fn criteria(self) -> SelectionCriteria {
        SelectionCriteria {
            require_store: matches!(
                self,
                Self::NearestWithStore | Self::NearestWithStoreCheapest
            ),
            restrict_to_cheapest: matches!(
                self,
                Self::NearestCheapest | Self::NearestWithStoreCheapest
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionCriteria {
    pub require_store: bool,
    pub restrict_to_cheapest: bool,
}

/// A station that passed every filter, with its resolved price and distance
/// from the query point.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub record: &'a Value,
    pub price: i64,
    pub distance_km: f64,
}

/// Picks the single best station for the query.
///
/// Records without a usable coordinate or price for `product` are skipped,
/// as are store-less stations when a store is required. With
/// `restrict_to_cheapest` only the stations at the exact minimum price stay
/// in play. The nearest remaining station wins; on an exact distance tie the
/// one listed first in the feed wins.
///
/// Returns `None` when no record survives filtering.
#[must_use]
pub fn select<'a>(
    records: &'a [Value],
    origin: Coordinate,
    product: Product,
    criteria: SelectionCriteria,
) -> Option<Candidate<'a>> {
    let mut candidates: Vec<Candidate<'a>> = records
        .iter()
        .filter_map(|record| {
            let position = station_coordinate(record)?;
            let price = station_price(record, product)?;
            if criteria.require_store && !has_store(record) {
                return None;
            }
            Some(Candidate {
                record,
                price,
                distance_km: distance_km(origin, position),
            })
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        candidates = candidates.len(),
        product = %product,
        "filtered station candidates"
    );

    if criteria.restrict_to_cheapest {
        let min_price = candidates.iter().map(|c| c.price).min()?;
        candidates.retain(|c| c.price == min_price);
    }

    // `min_by` returns the first of several equal minimums.
    candidates
        .into_iter()
        .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
}

#[cfg(test)]
#[path = "select_test.rs"]
mod tests;
