//! `RecordingObserver<W>` — bridges `SessionObserver` to a `SnapshotWriter`.

use std::ops::ControlFlow;

use rsim_core::{SimConfig, Tick};
use rsim_sim::{PositionSnapshot, SessionObserver};
use tracing::warn;

use crate::row::{RunSummaryRow, SnapshotRow};
use crate::writer::SnapshotWriter;
use crate::{OutputError, OutputResult};

/// A [`SessionObserver`] that records every snapshot it is shown, plus one
/// summary row per run.  Rows are flushed at the end of each run, so one
/// observer can record several runs.
///
/// Observer callbacks cannot return errors, so the first write error is
/// stored and the run is asked to stop.  Check it with
/// [`take_error`][Self::take_error] after `session.run()` returns.
pub struct RecordingObserver<W: SnapshotWriter> {
    writer:           W,
    tick_interval_ms: u32,
    rows_written:     u64,
    last_error:       Option<OutputError>,
}

impl<W: SnapshotWriter> RecordingObserver<W> {
    /// `config` supplies the tick interval used for `elapsed_ms`.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_interval_ms: config.tick_interval_ms,
            rows_written:     0,
            last_error:       None,
        }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Snapshot rows successfully written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Close the writer once no more runs will be recorded.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, tick: Tick, snap: &PositionSnapshot) {
        let row = SnapshotRow::new(tick, self.tick_interval_ms, snap);
        let result = self.writer.write_snapshot(&row);
        if result.is_ok() {
            self.rows_written += 1;
        }
        self.store_err(result);
    }

    fn end_run(&mut self, final_tick: Tick, completed: bool) {
        let row = RunSummaryRow {
            final_tick: final_tick.0,
            elapsed_ms: final_tick.0 * self.tick_interval_ms as u64,
            completed,
        };
        let result = self.writer.write_run_summary(&row);
        self.store_err(result);
        let result = self.writer.flush();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: SnapshotWriter> SessionObserver for RecordingObserver<W> {
    fn on_start(&mut self, tick: Tick, snapshot: Option<&PositionSnapshot>) {
        if let Some(snap) = snapshot {
            self.record(tick, snap);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, snapshot: &PositionSnapshot) -> ControlFlow<()> {
        self.record(tick, snapshot);
        if self.last_error.is_some() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn on_complete(&mut self, final_tick: Tick) {
        self.end_run(final_tick, true);
    }

    fn on_stop(&mut self, final_tick: Tick) {
        self.end_run(final_tick, false);
    }
}
