//! Human-readable readout of a snapshot, with stop indices resolved to names.

use std::fmt;

use rsim_core::Waypoint;

use crate::PositionSnapshot;

const NO_CURRENT_STOP: &str = "Starting Point";
const NO_NEXT_STOP: &str = "Final Destination";

/// The values a kinematics dashboard shows, formatted to one decimal place.
///
/// Stops without a (non-empty) name fall back to `"Starting Point"` for the
/// current stop and `"Final Destination"` for the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub current_stop:     String,
    pub next_stop:        String,
    pub speed_kmh:        String,
    pub remaining_km:     String,
    pub progress_percent: String,
}

impl DashboardView {
    /// Readout for `snapshot` on `route`.
    pub fn new(snapshot: &PositionSnapshot, route: &[Waypoint]) -> Self {
        Self {
            current_stop:     stop_name(route, snapshot.current_stop_index, NO_CURRENT_STOP),
            next_stop:        stop_name(route, snapshot.next_stop_index, NO_NEXT_STOP),
            speed_kmh:        format!("{:.1}", snapshot.speed_kmh),
            remaining_km:     format!("{:.1}", snapshot.remaining_distance_km),
            progress_percent: format!("{:.1}", snapshot.progress_percent),
        }
    }

    /// Readout before any snapshot exists: stops 0 and 1, zero kinematics.
    pub fn idle(route: &[Waypoint]) -> Self {
        Self {
            current_stop:     stop_name(route, 0, NO_CURRENT_STOP),
            next_stop:        stop_name(route, 1, NO_NEXT_STOP),
            speed_kmh:        "0.0".into(),
            remaining_km:     "0.0".into(),
            progress_percent: "0.0".into(),
        }
    }

    /// [`DashboardView::new`] if a snapshot exists, else [`DashboardView::idle`].
    pub fn from_latest(snapshot: Option<&PositionSnapshot>, route: &[Waypoint]) -> Self {
        match snapshot {
            Some(snap) => Self::new(snap, route),
            None => Self::idle(route),
        }
    }
}

fn stop_name(route: &[Waypoint], index: usize, fallback: &str) -> String {
    route
        .get(index)
        .map(|w| w.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Location:     {}", self.current_stop)?;
        writeln!(f, "Next Stop:            {}", self.next_stop)?;
        writeln!(f, "Current Speed:        {} km/h", self.speed_kmh)?;
        writeln!(f, "Distance Remaining:   {} km", self.remaining_km)?;
        write!(f, "Route Progress:       {}%", self.progress_percent)
    }
}
