//! Pacing between ticks of a session's run loop.

use std::time::Duration;

/// Decides how long [`SimulationSession::run`][crate::SimulationSession::run]
/// waits before each tick.
///
/// The pacer only affects wall-clock timing.  Progress per tick is fixed, so
/// a run produces the same snapshots under any pacer.
pub trait Pacer {
    fn wait(&mut self, interval: Duration);
}

/// Sleeps for the full tick interval (50 ms by default): a live display.
pub struct RealTimePacer;

impl Pacer for RealTimePacer {
    fn wait(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Does not wait at all.  For batch runs and tests.
pub struct ImmediatePacer;

impl Pacer for ImmediatePacer {
    fn wait(&mut self, _interval: Duration) {}
}
