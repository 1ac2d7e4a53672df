//! JSON bodies exchanged with the optimizer service.

use serde::{Deserialize, Serialize};

use rsim_core::{PathPoint, Waypoint};

use crate::{OptimizerError, OptimizerResult};

/// Fewest stops the service will optimize.
pub const MIN_LOCATIONS: usize = 2;

/// Body of `POST /api/optimize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub locations: Vec<Waypoint>,
}

impl OptimizeRequest {
    pub fn new(locations: Vec<Waypoint>) -> Self {
        Self { locations }
    }

    /// Apply the checks the service would apply, before spending a round trip.
    pub fn validate(&self) -> OptimizerResult<()> {
        if self.locations.len() < MIN_LOCATIONS {
            return Err(OptimizerError::InvalidRequest(
                "At least 2 locations are required".into(),
            ));
        }
        for (i, loc) in self.locations.iter().enumerate() {
            if loc.name.trim().is_empty() {
                return Err(OptimizerError::InvalidRequest(format!(
                    "location {} has no name",
                    i + 1
                )));
            }
            if !loc.point().is_valid() {
                return Err(OptimizerError::InvalidRequest(format!(
                    "location {} ({}) has invalid coordinates {}, {}",
                    i + 1,
                    loc.name,
                    loc.lat,
                    loc.lon
                )));
            }
        }
        Ok(())
    }
}

/// Successful optimizer reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    /// `"success"` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Stops in optimized travel order.
    pub route: Vec<Waypoint>,

    /// Street geometry through the stops.  Absent means empty.
    #[serde(default)]
    pub path_coordinates: Vec<PathPoint>,

    /// Route length in metres as computed by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
}

/// Body of an error reply.  Both fields are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
