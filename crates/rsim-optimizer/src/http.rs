//! Blocking HTTP client for the optimizer service.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use rsim_core::{CoreError, CoreResult};

use crate::error::DEFAULT_REJECTION_MESSAGE;
use crate::{ErrorBody, OptimizeRequest, OptimizeResponse, Optimizer, OptimizerError, OptimizerResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const OPTIMIZE_PATH: &str = "/api/optimize";

/// Road-graph construction plus the solver time limit can take a while.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where the optimizer lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            base_url:     DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl OptimizerConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    pub fn load(path: &Path) -> CoreResult<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        if config.base_url.trim().is_empty() {
            return Err(CoreError::Config("base_url must not be empty".into()));
        }
        Ok(config)
    }

    /// Full URL of the optimize endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), OPTIMIZE_PATH)
    }
}

/// `Optimizer` backed by `POST {base_url}/api/optimize`.
pub struct HttpOptimizer {
    client: Client,
    endpoint: String,
}

impl HttpOptimizer {
    pub fn new(config: &OptimizerConfig) -> OptimizerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OptimizerError::Client(e.to_string()))?;
        Ok(Self { client, endpoint: config.endpoint() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Optimizer for HttpOptimizer {
    fn optimize(&self, request: &OptimizeRequest) -> OptimizerResult<OptimizeResponse> {
        request.validate()?;
        info!(
            endpoint = %self.endpoint,
            locations = request.locations.len(),
            "requesting route optimization"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "optimizer unreachable");
                OptimizerError::Unreachable(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| OptimizerError::Unreachable(e.to_string()))?;

        if !status.is_success() {
            let message = rejection_message(&body);
            warn!(status = status.as_u16(), %message, "optimizer rejected request");
            return Err(OptimizerError::Rejected { status: status.as_u16(), message });
        }

        let parsed: OptimizeResponse = serde_json::from_str(&body)?;
        info!(
            stops = parsed.route.len(),
            path_points = parsed.path_coordinates.len(),
            total_m = parsed.total_distance.unwrap_or_default(),
            "route optimized"
        );
        Ok(parsed)
    }
}

/// The service's `message`, or the generic fallback when the body has none.
pub(crate) fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_owned())
}
