//! Plain data rows written by output backends.

use rsim_core::Tick;
use rsim_sim::PositionSnapshot;

/// One vehicle position, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    pub tick:             u64,
    pub elapsed_ms:       u64,
    pub lat:              f64,
    pub lon:              f64,
    pub current_stop:     usize,
    pub next_stop:        usize,
    pub speed_kmh:        f64,
    pub remaining_km:     f64,
    pub progress_percent: f64,
}

impl SnapshotRow {
    pub fn new(tick: Tick, tick_interval_ms: u32, snap: &PositionSnapshot) -> Self {
        Self {
            tick:             tick.0,
            elapsed_ms:       tick.0 * tick_interval_ms as u64,
            lat:              snap.position.lat,
            lon:              snap.position.lon,
            current_stop:     snap.current_stop_index,
            next_stop:        snap.next_stop_index,
            speed_kmh:        snap.speed_kmh,
            remaining_km:     snap.remaining_distance_km,
            progress_percent: snap.progress_percent,
        }
    }
}

/// How one run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub final_tick: u64,
    pub elapsed_ms: u64,
    /// `false` when the run was stopped before reaching the end of the path.
    pub completed:  bool,
}
