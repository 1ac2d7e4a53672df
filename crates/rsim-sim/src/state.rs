//! Mutable progress state of one simulation.

use rsim_core::config::{is_valid_speed_multiplier, MIN_SPEED_MULTIPLIER};

use crate::kinematics::PROGRESS_STEP;
use crate::{SimError, SimResult};

/// Whole steps in one full run (1 / `PROGRESS_STEP`).
const STEPS_PER_RUN: f64 = 1.0 / PROGRESS_STEP;

/// What one call to [`SimulationState::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateAdvance {
    /// Not running; nothing changed.
    Idle,
    /// Progress moved forward and is still below 1.
    Advanced,
    /// Progress reached 1; the state is now stopped at 0.
    Completed,
}

/// Progress, running flag, and speed multiplier of one session.
///
/// Progress is accumulated as a count of `PROGRESS_STEP` units, so integer
/// multipliers land on exactly 1.0 (1000 ticks at ×1, 100 at ×10).
/// The reported progress is always within `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    steps:            f64,
    running:          bool,
    speed_multiplier: f64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self { steps: 0.0, running: false, speed_multiplier: MIN_SPEED_MULTIPLIER }
    }
}

impl SimulationState {
    /// A stopped state at progress 0.
    pub fn new(speed_multiplier: f64) -> SimResult<Self> {
        let mut state = Self::default();
        state.set_speed_multiplier(speed_multiplier)?;
        Ok(state)
    }

    /// Fraction of the path travelled, in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f64 {
        (self.steps / STEPS_PER_RUN).min(1.0)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Rewind to 0 and start running.
    pub fn start(&mut self) {
        self.steps = 0.0;
        self.running = true;
    }

    /// Stop running and rewind to 0.
    pub fn stop(&mut self) {
        self.running = false;
        self.steps = 0.0;
    }

    /// Change the multiplier.  Only affects later calls to `advance`.
    pub fn set_speed_multiplier(&mut self, multiplier: f64) -> SimResult<()> {
        if !is_valid_speed_multiplier(multiplier) {
            return Err(SimError::InvalidSpeedMultiplier(multiplier));
        }
        self.speed_multiplier = multiplier;
        Ok(())
    }

    /// Add one tick's worth of progress.  Reaching 1 stops and rewinds.
    pub fn advance(&mut self) -> StateAdvance {
        if !self.running {
            return StateAdvance::Idle;
        }
        self.steps += self.speed_multiplier;
        if self.steps >= STEPS_PER_RUN {
            self.stop();
            return StateAdvance::Completed;
        }
        StateAdvance::Advanced
    }
}
