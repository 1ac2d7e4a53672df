//! The `SnapshotWriter` trait implemented by output backends.

use crate::{OutputResult, RunSummaryRow, SnapshotRow};

pub trait SnapshotWriter {
    /// Append one snapshot row.
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()>;

    /// Record how a run ended.
    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Push buffered rows to disk.  Called at the end of every run; the writer
    /// stays open for the next one.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush for the last time.  Later writes are an error.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
