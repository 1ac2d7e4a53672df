//! `rsim-output` — recording simulation runs to disk.
//!
//! | Type                  | Role                                              |
//! |-----------------------|---------------------------------------------------|
//! | [`SnapshotWriter`]    | Backend trait                                     |
//! | [`CsvSnapshotWriter`] | Writes `snapshots.csv` and `runs.csv`             |
//! | [`RecordingObserver`] | `SessionObserver` that feeds a `SnapshotWriter`   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use rsim_output::{CsvSnapshotWriter, RecordingObserver};
//!
//! let writer = CsvSnapshotWriter::new(Path::new("./output"))?;
//! let mut obs = RecordingObserver::new(writer, &config);
//! session.run(&mut ImmediatePacer, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvSnapshotWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RecordingObserver;
pub use row::{RunSummaryRow, SnapshotRow};
pub use writer::SnapshotWriter;
