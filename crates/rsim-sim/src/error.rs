use rsim_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("speed multiplier {0} outside [1, 10]")]
    InvalidSpeedMultiplier(f64),

    #[error("route has no waypoints")]
    NoWaypoints,

    #[error("session {0} not found in fleet")]
    UnknownSession(usize),
}

pub type SimResult<T> = Result<T, SimError>;
