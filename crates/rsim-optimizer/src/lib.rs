//! `rsim-optimizer` — the boundary to the route-optimization service.
//!
//! The optimizer decides the stop order and returns the street geometry that
//! connects the stops.  How it orders stops is its own business; this crate
//! only speaks its protocol.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`wire`]        | `OptimizeRequest`, `OptimizeResponse`, `ErrorBody`         |
//! | [`optimizer`]   | `Optimizer` trait, `PassthroughOptimizer`                  |
//! | [`http`]        | `HttpOptimizer`, `OptimizerConfig`                         |
//! | [`sample`]      | The four-stop sample route                                 |
//! | [`error`]       | `OptimizerError`, `OptimizerResult<T>`                     |
//!
//! # Protocol
//!
//! ```text
//! POST {base_url}/api/optimize
//!   { "locations": [ { "stop_lat", "stop_lon", "stop_name" }, … ] }
//!
//! 2xx → { "route": [ …stops in travel order… ],
//!         "path_coordinates": [ [lat, lon], … ],
//!         "total_distance": metres }
//! 4xx/5xx → { "message": "…" }
//! ```
//!
//! One request per optimize action; failed requests are not retried.

pub mod error;
pub mod http;
pub mod optimizer;
pub mod sample;
pub mod wire;

#[cfg(test)]
mod tests;

pub use error::{OptimizerError, OptimizerResult};
pub use http::{HttpOptimizer, OptimizerConfig};
pub use optimizer::{Optimizer, PassthroughOptimizer};
pub use wire::{ErrorBody, OptimizeRequest, OptimizeResponse};
