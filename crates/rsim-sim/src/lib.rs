//! `rsim-sim` — drives a simulated vehicle along an optimized route.
//!
//! # Tick pipeline
//!
//! ```text
//! every tick_interval_ms while running:
//!   ① Clock     — progress += 0.001 × speed_multiplier
//!                 (progress ≥ 1 → stop, reset to 0, report completion)
//!   ② Mapper    — progress → position on the indexed polyline
//!   ③ Resolver  — position → current stop index (forward threshold scan)
//!   ④ Reporter  — PositionSnapshot { position, stops, speed, remaining, % }
//!   ⑤ Observer  — snapshot handed to the display layer
//! ```
//!
//! Only ① mutates state; ②–④ are pure functions of the progress value and the
//! immutable route, so a tick either yields a complete new snapshot or leaves
//! the previous one in place.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`kinematics`]  | `PositionSnapshot`, `compute_snapshot`                     |
//! | [`state`]       | `SimulationState` — progress, running flag, multiplier     |
//! | [`session`]     | `SimulationSession`, `TickOutcome`, `RunOutcome`           |
//! | [`pacer`]       | `Pacer` trait, `RealTimePacer`, `ImmediatePacer`           |
//! | [`observer`]    | `SessionObserver` trait, `NoopObserver`                    |
//! | [`fleet`]       | `Fleet` — independent sessions ticked together             |
//! | [`dashboard`]   | `DashboardView` — snapshot resolved to stop names          |
//! | [`error`]       | `SimError`, `SimResult<T>`                                 |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `Fleet::tick_all` runs on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rsim_core::SimConfig;
//! use rsim_path::IndexedPath;
//! use rsim_sim::{ImmediatePacer, NoopObserver, SimulationSession};
//!
//! let path = IndexedPath::new(response.path_coordinates);
//! let mut session = SimulationSession::new(response.route, path, &SimConfig::default())?;
//! session.run(&mut ImmediatePacer, &mut NoopObserver);
//! ```

pub mod dashboard;
pub mod error;
pub mod fleet;
pub mod kinematics;
pub mod observer;
pub mod pacer;
pub mod session;
pub mod state;


pub use dashboard::DashboardView;
pub use error::{SimError, SimResult};
pub use fleet::Fleet;
pub use kinematics::{compute_snapshot, PositionSnapshot, PROGRESS_STEP};
pub use observer::{NoopObserver, SessionObserver};
pub use pacer::{ImmediatePacer, Pacer, RealTimePacer};
pub use session::{RunOutcome, SimulationSession, TickOutcome};
pub use state::{SimulationState, StateAdvance};
