//! The `Optimizer` trait and an offline implementation.
//!
//! Applications obtain routes through the trait, so the HTTP client can be
//! swapped for a local stand-in (tests, offline demos) without touching the
//! simulation code.

use rsim_core::{GeoPoint, Waypoint};

use crate::{OptimizeRequest, OptimizeResponse, OptimizerResult};

/// Anything that turns a set of stops into an ordered route with geometry.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one optimizer can serve several
/// sessions.
pub trait Optimizer: Send + Sync {
    fn optimize(&self, request: &OptimizeRequest) -> OptimizerResult<OptimizeResponse>;
}

/// Keeps the stops in the order given and connects them with straight lines.
///
/// Validates the request exactly like the service does.
pub struct PassthroughOptimizer;

impl Optimizer for PassthroughOptimizer {
    fn optimize(&self, request: &OptimizeRequest) -> OptimizerResult<OptimizeResponse> {
        request.validate()?;

        let path: Vec<GeoPoint> = request.locations.iter().map(Waypoint::point).collect();
        let total_km: f64 = path.windows(2).map(|w| w[0].distance_km(w[1])).sum();

        Ok(OptimizeResponse {
            status:           Some("success".into()),
            route:            request.locations.clone(),
            path_coordinates: path,
            total_distance:   Some(total_km * 1_000.0),
        })
    }
}
