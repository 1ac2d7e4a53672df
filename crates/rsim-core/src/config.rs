//! Simulation configuration.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, TickClock};

/// Default pause between ticks, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 50;

/// Distance under which the vehicle counts as being at a stop, in kilometres.
pub const DEFAULT_STOP_RADIUS_KM: f64 = 0.1;

/// Slowest allowed speed multiplier.
pub const MIN_SPEED_MULTIPLIER: f64 = 1.0;

/// Fastest allowed speed multiplier.
pub const MAX_SPEED_MULTIPLIER: f64 = 10.0;

/// Top-level simulation configuration.
///
/// Every field has a default, so a config file only needs to name the values
/// it overrides:
///
/// ```json
/// { "speed_multiplier": 4, "output_interval_ticks": 10 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Milliseconds between ticks of a real-time driver.
    pub tick_interval_ms: u32,

    /// Initial speed multiplier, in `[1, 10]`.
    pub speed_multiplier: f64,

    /// Stop-matching threshold for the nearest-stop resolver, in kilometres.
    pub stop_radius_km: f64,

    /// Record a snapshot every N ticks.  1 = every tick; 0 is rejected.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms:      DEFAULT_TICK_INTERVAL_MS,
            speed_multiplier:      MIN_SPEED_MULTIPLIER,
            stop_radius_km:        DEFAULT_STOP_RADIUS_KM,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from any JSON reader.
    pub fn from_json_reader<R: Read>(reader: R) -> CoreResult<Self> {
        let config: SimConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(s: &str) -> CoreResult<Self> {
        let config: SimConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Check value ranges.  Called by every loader.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(CoreError::Config("tick_interval_ms must be positive".into()));
        }
        if !is_valid_speed_multiplier(self.speed_multiplier) {
            return Err(CoreError::Config(format!(
                "speed_multiplier {} outside [{MIN_SPEED_MULTIPLIER}, {MAX_SPEED_MULTIPLIER}]",
                self.speed_multiplier
            )));
        }
        if self.output_interval_ticks == 0 {
            return Err(CoreError::Config("output_interval_ticks must be at least 1".into()));
        }
        if !(self.stop_radius_km.is_finite() && self.stop_radius_km >= 0.0) {
            return Err(CoreError::Config(format!(
                "stop_radius_km {} must be a non-negative number",
                self.stop_radius_km
            )));
        }
        Ok(())
    }

    /// Construct a `TickClock` for one session of this run.
    pub fn make_clock(&self) -> TickClock {
        TickClock::new(self.tick_interval_ms)
    }
}

/// `true` if `m` is finite and within `[MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER]`.
#[inline]
pub fn is_valid_speed_multiplier(m: f64) -> bool {
    m.is_finite() && (MIN_SPEED_MULTIPLIER..=MAX_SPEED_MULTIPLIER).contains(&m)
}
