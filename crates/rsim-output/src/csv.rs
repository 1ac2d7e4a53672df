//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `snapshots.csv`
//! - `runs.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::SnapshotWriter;
use crate::{OutputError, OutputResult, RunSummaryRow, SnapshotRow};

pub const SNAPSHOTS_FILE: &str = "snapshots.csv";
pub const RUNS_FILE: &str = "runs.csv";

pub const SNAPSHOT_HEADERS: [&str; 9] = [
    "tick",
    "elapsed_ms",
    "lat",
    "lon",
    "current_stop",
    "next_stop",
    "speed_kmh",
    "remaining_km",
    "progress_percent",
];

pub const RUN_HEADERS: [&str; 3] = ["final_tick", "elapsed_ms", "completed"];

/// Writes snapshots and run summaries to two CSV files.
pub struct CsvSnapshotWriter {
    snapshots: Writer<File>,
    runs:      Writer<File>,
    finished:  bool,
}

impl CsvSnapshotWriter {
    /// Create (truncating) both files in `dir` and write the header rows.
    ///
    /// `dir` must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record(SNAPSHOT_HEADERS)?;

        let mut runs = Writer::from_path(dir.join(RUNS_FILE))?;
        runs.write_record(RUN_HEADERS)?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self { snapshots, runs, finished: false })
    }

    fn ensure_open(&self) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        Ok(())
    }
}

impl SnapshotWriter for CsvSnapshotWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        self.ensure_open()?;
        self.snapshots.write_record(&[
            row.tick.to_string(),
            row.elapsed_ms.to_string(),
            format!("{:.6}", row.lat),
            format!("{:.6}", row.lon),
            row.current_stop.to_string(),
            row.next_stop.to_string(),
            format!("{:.3}", row.speed_kmh),
            format!("{:.4}", row.remaining_km),
            format!("{:.1}", row.progress_percent),
        ])?;
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.ensure_open()?;
        self.runs.write_record(&[
            row.final_tick.to_string(),
            row.elapsed_ms.to_string(),
            (row.completed as u8).to_string(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.snapshots.flush()?;
        self.runs.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.flush()?;
        self.finished = true;
        Ok(())
    }
}
