//! The `SimulationSession` struct and its tick loop.

use std::ops::ControlFlow;

use rsim_core::{SimConfig, Tick, TickClock, Waypoint};
use rsim_path::{resolve_stop_within, IndexedPath};
use tracing::{debug, info, trace};

use crate::{
    compute_snapshot, Pacer, PositionSnapshot, SessionObserver, SimError, SimResult,
    SimulationState, StateAdvance,
};

/// What one call to [`SimulationSession::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The session is stopped; nothing changed.
    Idle,
    /// Progress advanced.  `None` when no position could be produced (path not
    /// simulatable); the previous snapshot stays current.
    Advanced(Option<PositionSnapshot>),
    /// Progress reached 1; the session stopped and rewound to 0.
    Completed,
}

/// How [`SimulationSession::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Progress reached 1 after `ticks` ticks.
    Completed { ticks: u64 },
    /// The observer asked to stop (or the session was not running) after
    /// `ticks` ticks.
    Stopped { ticks: u64 },
}

/// One simulated vehicle on one optimized route.
///
/// A session owns its route, its indexed path, its progress state, and its
/// tick clock.  Sessions share nothing, so any number can run side by side
/// (see [`Fleet`][crate::Fleet]).
///
/// The session is the only writer of its progress.  Positions, stop indices,
/// and kinematics are recomputed from progress on every tick.
#[derive(Debug, Clone)]
pub struct SimulationSession {
    route:                 Vec<Waypoint>,
    path:                  IndexedPath,
    state:                 SimulationState,
    clock:                 TickClock,
    stop_radius_km:        f64,
    output_interval_ticks: u64,
    last_snapshot:         Option<PositionSnapshot>,
}

impl SimulationSession {
    /// Create a stopped session for `route`, travelling along `path`.
    ///
    /// A path with fewer than two points is accepted: the session still ticks
    /// but never produces a snapshot.
    ///
    /// # Errors
    ///
    /// [`SimError::NoWaypoints`] for an empty route, [`SimError::Config`] for
    /// an invalid `config`.
    pub fn new(route: Vec<Waypoint>, path: IndexedPath, config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        if route.is_empty() {
            return Err(SimError::NoWaypoints);
        }
        if !path.is_simulatable() {
            debug!(points = path.points().len(), "path is not simulatable; no positions will be produced");
        }

        Ok(Self {
            route,
            path,
            state:                 SimulationState::new(config.speed_multiplier)?,
            clock:                 config.make_clock(),
            stop_radius_km:        config.stop_radius_km,
            output_interval_ticks: config.output_interval_ticks,
            last_snapshot:         None,
        })
    }

    // ── Controls ──────────────────────────────────────────────────────────

    /// Rewind to progress 0 and start running.
    ///
    /// The snapshot at progress 0 becomes the current snapshot.
    pub fn start(&mut self) {
        self.state.start();
        self.clock.reset();
        self.last_snapshot = self.snapshot_at(0.0);
        info!(
            stops = self.route.len(),
            path_km = self.path.total_km(),
            speed_multiplier = self.state.speed_multiplier(),
            "simulation started"
        );
    }

    /// Stop running and rewind to progress 0.
    ///
    /// Takes effect immediately: every later `tick()` is a no-op until the
    /// next `start()`.
    pub fn stop(&mut self) {
        if self.state.is_running() {
            info!(tick = %self.clock.current_tick, "simulation stopped");
        }
        self.state.stop();
    }

    /// Change the speed multiplier (finite, within `[1, 10]`).  The new value
    /// is used from the next tick on; progress already made is unchanged.
    pub fn set_speed_multiplier(&mut self, multiplier: f64) -> SimResult<()> {
        self.state.set_speed_multiplier(multiplier)?;
        debug!(multiplier, "speed multiplier changed");
        Ok(())
    }

    // ── Ticking ───────────────────────────────────────────────────────────

    /// Advance one tick.
    pub fn tick(&mut self) -> TickOutcome {
        match self.state.advance() {
            StateAdvance::Idle => TickOutcome::Idle,
            StateAdvance::Completed => {
                self.clock.advance();
                info!(tick = %self.clock.current_tick, "simulation completed");
                TickOutcome::Completed
            }
            StateAdvance::Advanced => {
                self.clock.advance();
                let progress = self.state.progress();
                let snapshot = self.snapshot_at(progress);
                if let Some(snap) = snapshot {
                    let previous_stop = self.last_snapshot.map(|s| s.current_stop_index);
                    if previous_stop != Some(snap.current_stop_index) {
                        debug!(
                            stop = snap.current_stop_index,
                            name = %self.route[snap.current_stop_index].name,
                            "current stop changed"
                        );
                    }
                    self.last_snapshot = Some(snap);
                }
                trace!(tick = %self.clock.current_tick, progress, "tick");
                TickOutcome::Advanced(snapshot)
            }
        }
    }

    /// Start the session and tick it until it completes or the observer
    /// breaks.
    ///
    /// `pacer` is asked to wait one tick interval before every tick.  The
    /// observer sees every `output_interval_ticks`-th snapshot.
    pub fn run<P: Pacer, O: SessionObserver>(&mut self, pacer: &mut P, observer: &mut O) -> RunOutcome {
        self.start();
        observer.on_start(self.clock.current_tick, self.last_snapshot.as_ref());

        loop {
            pacer.wait(self.clock.interval());
            match self.tick() {
                TickOutcome::Idle => {
                    let ticks = self.clock.current_tick.0;
                    observer.on_stop(self.clock.current_tick);
                    return RunOutcome::Stopped { ticks };
                }
                TickOutcome::Completed => {
                    observer.on_complete(self.clock.current_tick);
                    return RunOutcome::Completed { ticks: self.clock.current_tick.0 };
                }
                TickOutcome::Advanced(None) => {}
                TickOutcome::Advanced(Some(snap)) => {
                    let now = self.clock.current_tick;
                    if now.0.is_multiple_of(self.output_interval_ticks)
                        && observer.on_snapshot(now, &snap) == ControlFlow::Break(())
                    {
                        self.stop();
                        observer.on_stop(now);
                        return RunOutcome::Stopped { ticks: now.0 };
                    }
                }
            }
        }
    }

    // ── Derived state ─────────────────────────────────────────────────────

    /// The snapshot at `progress`, without touching session state.
    ///
    /// `None` if the path is not simulatable or `progress` lies beyond the
    /// path.
    pub fn snapshot_at(&self, progress: f64) -> Option<PositionSnapshot> {
        let mapped = self.path.position_at(progress)?;
        let stop_index = resolve_stop_within(mapped.position, &self.route, self.stop_radius_km);
        Some(compute_snapshot(
            mapped.position,
            self.path.total_km(),
            progress,
            stop_index,
            self.route.len(),
        ))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The most recent snapshot produced since the last `start()`.
    #[inline]
    pub fn last_snapshot(&self) -> Option<&PositionSnapshot> {
        self.last_snapshot.as_ref()
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    #[inline]
    pub fn speed_multiplier(&self) -> f64 {
        self.state.speed_multiplier()
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn route(&self) -> &[Waypoint] {
        &self.route
    }

    #[inline]
    pub fn path(&self) -> &IndexedPath {
        &self.path
    }
}
