//! Error types for rsim-optimizer.

use thiserror::Error;

/// Message shown when the service rejects a request without saying why.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to optimize route";

/// Errors from an optimize call.
///
/// `Unreachable`: the service could not be contacted.
/// `Rejected`: it answered with a non-success status.
#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to connect to server: {0}")]
    Unreachable(String),

    /// Displays the service's own message verbatim.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("could not decode optimizer response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

pub type OptimizerResult<T> = Result<T, OptimizerError>;
