//! Single-shot HTTP invocation of a Glif run.

use super::request::RunRequest;
use super::response::GlifResult;
use crate::config::GlifConfig;
use crate::error::GlifError;
use async_trait::async_trait;
use tracing::{debug, info};

const STRICT_QUERY: &str = "?strict=1";

/// Runs a glif and returns its raw result.
#[async_trait]
pub trait GlifInvoker: Send + Sync {
    async fn run(&self, request: &RunRequest, config: &GlifConfig) -> Result<GlifResult, GlifError>;
}

/// Target URL for a run: the API URL, plus `?strict=1` in strict mode.
pub fn build_run_url(config: &GlifConfig) -> String {
    if config.strict_mode {
        format!("{}{}", config.api_url, STRICT_QUERY)
    } else {
        config.api_url.clone()
    }
}

/// [`GlifInvoker`] over `reqwest`. No retries and no timeout beyond the
/// transport default.
#[derive(Debug, Clone, Default)]
pub struct GlifClient {
    http: reqwest::Client,
}

impl GlifClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GlifInvoker for GlifClient {
    async fn run(&self, request: &RunRequest, config: &GlifConfig) -> Result<GlifResult, GlifError> {
        let url = build_run_url(config);
        debug!(url = %url, config = ?config, glif_id = request.glif_id(), "Posting Glif run");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&config.api_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            return Err(GlifError::TransportError(status_text));
        }

        let result: GlifResult = response
            .json()
            .await
            .map_err(|e| GlifError::InvalidResponse(e.to_string()))?;
        info!(glif_id = request.glif_id(), run_id = %result.id, "Glif run completed");
        Ok(result)
    }
}
