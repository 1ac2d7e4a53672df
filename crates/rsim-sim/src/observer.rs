//! Session observer trait — the display layer's view of a run.

use std::ops::ControlFlow;

use rsim_core::Tick;

use crate::PositionSnapshot;

/// Callbacks invoked by [`SimulationSession::run`][crate::SimulationSession::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — console dashboard
///
/// ```rust,ignore
/// struct Console;
///
/// impl SessionObserver for Console {
///     fn on_snapshot(&mut self, tick: Tick, snap: &PositionSnapshot) -> ControlFlow<()> {
///         println!("{tick}: {snap}");
///         ControlFlow::Continue(())
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called once after `start()`, with the snapshot at progress 0 (absent
    /// when the path is not simulatable).
    fn on_start(&mut self, _tick: Tick, _snapshot: Option<&PositionSnapshot>) {}

    /// Called with each new snapshot, at the session's output interval.
    ///
    /// Returning `ControlFlow::Break` stops the session before the next tick.
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &PositionSnapshot) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called when progress reached 1 and the session reset itself.
    fn on_complete(&mut self, _final_tick: Tick) {}

    /// Called when the run ended through `stop()` instead of completion.
    fn on_stop(&mut self, _final_tick: Tick) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
