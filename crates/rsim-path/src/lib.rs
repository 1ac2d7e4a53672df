//! `rsim-path` — arc-length parameterization of a polyline.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`table`]      | `SegmentTable` — per-segment and cumulative lengths (km)   |
//! | [`mapper`]     | `map_progress` — progress fraction → interpolated position |
//! | [`resolver`]   | `resolve_stop` — position → current waypoint index         |
//! | [`simplify`]   | Douglas–Peucker polyline simplification                    |
//! | [`path`]       | `IndexedPath` — points and their table, built together     |
//! | [`error`]      | `PathError`, `PathResult<T>`                               |
//!
//! Everything here is a pure function of immutable inputs, so a session can
//! recompute positions every tick without synchronization.

pub mod error;
pub mod mapper;
pub mod path;
pub mod resolver;
pub mod simplify;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{PathError, PathResult};
pub use mapper::{map_progress, MappedPosition};
pub use path::IndexedPath;
pub use resolver::{resolve_stop, resolve_stop_within};
pub use simplify::{simplify, DEFAULT_SIMPLIFY_TOLERANCE};
pub use table::SegmentTable;
