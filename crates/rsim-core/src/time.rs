//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  A session's clock maps
//! ticks to wall-clock time through a fixed interval:
//!
//!   elapsed_ms = tick * tick_interval_ms
//!
//! The interval only paces the driver loop; progress itself advances by a
//! fixed step per tick, so a run is reproducible regardless of how fast the
//! host actually ticks.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Counts ticks for one simulation session and converts them to elapsed time.
///
/// Holds no heap data; each session owns its own clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickClock {
    /// Milliseconds between ticks.  Default: 50.
    pub tick_interval_ms: u32,
    /// Ticks since the last `reset()`.
    pub current_tick: Tick,
}

impl TickClock {
    pub fn new(tick_interval_ms: u32) -> Self {
        Self { tick_interval_ms, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Rewind to tick 0.
    #[inline]
    pub fn reset(&mut self) {
        self.current_tick = Tick::ZERO;
    }

    /// The pause a real-time driver waits between two ticks.
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }

    /// Elapsed milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_interval_ms as u64
    }
}

impl fmt::Display for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed_ms();
        write!(f, "{} ({}.{:03} s)", self.current_tick, ms / 1000, ms % 1000)
    }
}
