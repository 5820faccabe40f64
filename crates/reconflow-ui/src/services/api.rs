//! HTTP client for the two summary resources.

use crate::core::store::RECENT_SCANS_LIMIT;
use gloo_net::http::Request;
use reconflow_api_models::{PayloadError, ScanResultSummary, ToolStats, decode_scan_results};
use serde_json::Value;
use thiserror::Error;

/// Failure modes of a summary request.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The request never produced a response.
    #[error("transport failure: {detail}")]
    Transport {
        /// Browser/network diagnostic.
        detail: String,
    },
    /// The backend answered with a non-success status.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The body was not JSON or did not have the expected shape.
    #[error("undecodable payload: {detail}")]
    Decode {
        /// Decoder diagnostic.
        detail: String,
    },
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        Self::Decode {
            detail: err.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = Request::get(&format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|err| ApiError::Transport {
                detail: err.to_string(),
            })?;
        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| ApiError::Decode {
                detail: err.to_string(),
            })
    }

    pub(crate) async fn fetch_tool_stats(&self) -> Result<ToolStats, ApiError> {
        let body = self.get_json("/tools/stats").await?;
        Ok(ToolStats::from_value(body)?)
    }

    pub(crate) async fn fetch_recent_scans(&self) -> Result<Vec<ScanResultSummary>, ApiError> {
        let body = self.get_json("/scan-results").await?;
        Ok(decode_scan_results(body, RECENT_SCANS_LIMIT)?)
    }
}
