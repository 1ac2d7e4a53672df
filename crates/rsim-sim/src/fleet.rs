//! `Fleet` — several independent sessions ticked together.

use crate::{PositionSnapshot, SimError, SimResult, SimulationSession, TickOutcome};

/// A collection of [`SimulationSession`]s advanced in lockstep.
///
/// Each session keeps its own state; ticking one never reads another.  With
/// the `parallel` feature `tick_all` uses Rayon's thread pool.  Outcomes are
/// returned in insertion order either way.
#[derive(Debug, Default)]
pub struct Fleet {
    sessions: Vec<SimulationSession>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a session and return its index.
    pub fn push(&mut self, session: SimulationSession) -> usize {
        self.sessions.push(session);
        self.sessions.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, index: usize) -> SimResult<&SimulationSession> {
        self.sessions.get(index).ok_or(SimError::UnknownSession(index))
    }

    pub fn get_mut(&mut self, index: usize) -> SimResult<&mut SimulationSession> {
        self.sessions.get_mut(index).ok_or(SimError::UnknownSession(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimulationSession> {
        self.sessions.iter()
    }

    pub fn start_all(&mut self) {
        self.sessions.iter_mut().for_each(SimulationSession::start);
    }

    pub fn stop_all(&mut self) {
        self.sessions.iter_mut().for_each(SimulationSession::stop);
    }

    /// Number of sessions still running.
    pub fn running_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.is_running()).count()
    }

    /// Advance every session by one tick.
    pub fn tick_all(&mut self) -> Vec<TickOutcome> {
        #[cfg(not(feature = "parallel"))]
        {
            self.sessions.iter_mut().map(SimulationSession::tick).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.sessions.par_iter_mut().map(SimulationSession::tick).collect()
        }
    }

    /// Latest snapshot of every session, in insertion order.
    pub fn snapshots(&self) -> Vec<Option<PositionSnapshot>> {
        self.sessions.iter().map(|s| s.last_snapshot().copied()).collect()
    }
}
