//! Position → waypoint index.
//!
//! The resolver walks the stops in route order and stops at the first one the
//! vehicle is within `radius_km` of, falling back to the final stop.  It is
//! not a nearest-neighbour search: between stops, the reported index is the
//! last stop of the route, and a stop reached twice is only ever matched at
//! its first position in the order.

use rsim_core::config::DEFAULT_STOP_RADIUS_KM;
use rsim_core::{GeoPoint, Waypoint};

/// [`resolve_stop_within`] with the default 0.1 km threshold.
#[inline]
pub fn resolve_stop(position: GeoPoint, waypoints: &[Waypoint]) -> usize {
    resolve_stop_within(position, waypoints, DEFAULT_STOP_RADIUS_KM)
}

/// Index of the first waypoint within `radius_km` of `position`, or the last
/// index if none is.
///
/// Always a valid index for a non-empty slice; returns 0 for an empty one.
pub fn resolve_stop_within(position: GeoPoint, waypoints: &[Waypoint], radius_km: f64) -> usize {
    let mut index = 0;
    while index + 1 < waypoints.len()
        && position.distance_km(waypoints[index].point()) > radius_km
    {
        index += 1;
    }
    index
}
