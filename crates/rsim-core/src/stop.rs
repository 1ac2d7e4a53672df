//! Named stops in optimized route order.

use serde::{Deserialize, Serialize};

use crate::GeoPoint;

/// A stop of interest, as returned (in travel order) by the route optimizer.
///
/// Field names on the wire are `stop_lat`, `stop_lon` and `stop_name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    #[serde(rename = "stop_lat")]
    pub lat: f64,
    #[serde(rename = "stop_lon")]
    pub lon: f64,
    #[serde(rename = "stop_name")]
    pub name: String,
}

impl Waypoint {
    pub fn new(lat: f64, lon: f64, name: impl Into<String>) -> Self {
        Self { lat, lon, name: name.into() }
    }

    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

impl std::fmt::Display for Waypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.point())
    }
}
