//! Geodesic distance on the WGS84 ellipsoid.

use geo::{GeodesicDistance, Point};

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Returns `None` unless both values are finite and within
    /// `[-90, 90]` / `[-180, 180]`.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        valid.then_some(Self { lat, lng })
    }

    #[must_use]
    pub fn lat(self) -> f64 {
        self.lat
    }

    #[must_use]
    pub fn lng(self) -> f64 {
        self.lng
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

/// Surface distance in kilometres between two coordinates.
///
/// Uses Karney's geodesic solution, accurate to well under a millimetre,
/// so stations a few metres apart still rank correctly.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    a.to_point().geodesic_distance(&b.to_point()) / 1000.0
}
