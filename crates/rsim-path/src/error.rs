use thiserror::Error;

/// Errors produced by `rsim-path`.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("simplification tolerance {0} must be a non-negative number")]
    InvalidTolerance(f64),
}

pub type PathResult<T> = Result<T, PathError>;
