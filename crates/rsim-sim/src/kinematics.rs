//! Per-tick kinematic snapshot.

use std::fmt;

use rsim_core::GeoPoint;

/// Progress added per tick at speed multiplier 1.
pub const PROGRESS_STEP: f64 = 0.001;

const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Derived vehicle state for one tick.  Recomputed every tick, never stored
/// beyond "the last one shown".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSnapshot {
    pub position:              GeoPoint,
    /// Waypoint the vehicle currently represents.
    pub current_stop_index:    usize,
    /// `current_stop_index + 1`, capped at the last waypoint.
    pub next_stop_index:       usize,
    /// Reported speed in km/h.  Depends only on total path length.
    pub speed_kmh:             f64,
    /// Arc length still to travel, in km.
    pub remaining_distance_km: f64,
    /// `progress × 100`, rounded to one decimal place.
    pub progress_percent:      f64,
}

/// Package the kinematics for `progress` along a path of `total_km`.
///
/// The reported speed is `total_km × PROGRESS_STEP × 3600`: the path length
/// covered by one nominal step, read as if a step took one second.  It does
/// not change with the speed multiplier or elapsed time.
pub fn compute_snapshot(
    position:       GeoPoint,
    total_km:       f64,
    progress:       f64,
    stop_index:     usize,
    waypoint_count: usize,
) -> PositionSnapshot {
    PositionSnapshot {
        position,
        current_stop_index:    stop_index,
        next_stop_index:       (stop_index + 1).min(waypoint_count.saturating_sub(1)),
        speed_kmh:             total_km * PROGRESS_STEP * SECONDS_PER_HOUR,
        remaining_distance_km: total_km * (1.0 - progress),
        progress_percent:      (progress * 1_000.0).round() / 10.0,
    }
}

impl fmt::Display for PositionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stop {} → {} | {:.1} km/h | {:.1} km left | {:.1}%",
            self.position,
            self.current_stop_index,
            self.next_stop_index,
            self.speed_kmh,
            self.remaining_distance_km,
            self.progress_percent,
        )
    }
}
