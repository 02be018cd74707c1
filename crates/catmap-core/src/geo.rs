use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Default location for cats created without one.
    pub const ORIGIN: Self = Self { lat: 0.0, lng: 0.0 };
}

/// Axis-aligned region in lat/lng space. Not geodesically correct; fine for
/// the small areas the search is meant for. Does not handle the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Builds a box from opposite corners as the GraphQL surface supplies
    /// them (bottom-left and top-right).
    #[must_use]
    pub const fn from_corners(bottom_left: GeoPoint, top_right: GeoPoint) -> Self {
        Self {
            min_lat: bottom_left.lat,
            max_lat: top_right.lat,
            min_lng: bottom_left.lng,
            max_lng: top_right.lng,
        }
    }

    /// Inclusive on all four edges, so a degenerate box (`min == max`)
    /// still matches points exactly on the boundary. An inverted box
    /// (`min > max`) matches nothing.
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lng >= self.min_lng
            && point.lng <= self.max_lng
    }
}
