//! `rsim-core` — foundational types for the `route_sim` path-simulation engine.
//!
//! This crate is a dependency of every other `rsim-*` crate.  It has no
//! `rsim-*` dependencies and keeps its external ones small (`thiserror`,
//! `serde`, `serde_json`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, `PathPoint`, haversine distance           |
//! | [`stop`]        | `Waypoint` — a named stop in optimized order          |
//! | [`time`]        | `Tick`, `TickClock`                                   |
//! | [`config`]      | `SimConfig` and its JSON loader                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod geo;
pub mod stop;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, PathPoint, EARTH_RADIUS_KM};
pub use stop::Waypoint;
pub use time::{Tick, TickClock};
