//! Log batch analysis: render the prompt, make one provider call, return the text.

use super::prompt::{render_prompt, serialize_records};
use super::providers::{ProviderError, TextProvider};
use crate::models::{AnalysisResult, LogRecord};
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

pub const EMPTY_BATCH_MESSAGE: &str = "No log entries provided.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The batch had no records; the provider was not called.
    #[error("No log entries provided.")]
    EmptyBatch,

    /// The provider call failed. Not retried.
    #[error(transparent)]
    Upstream(#[from] ProviderError),

    #[error("Failed to encode log records: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyBatch => AppError::BadRequest(EMPTY_BATCH_MESSAGE.to_string()),
            AnalysisError::Upstream(e) => AppError::UpstreamFailure(e.to_string()),
            AnalysisError::Encode(e) => AppError::InternalError(anyhow::Error::new(e)),
        }
    }
}

/// Stateless analyzer sharing one provider handle across requests.
#[derive(Clone)]
pub struct LogAnalyzer {
    provider: Arc<dyn TextProvider>,
}

impl LogAnalyzer {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub async fn analyze(&self, records: &[LogRecord]) -> Result<AnalysisResult, AnalysisError> {
        if records.is_empty() {
            return Err(AnalysisError::EmptyBatch);
        }

        let serialized = serialize_records(records)?;
        let prompt = render_prompt(&serialized);

        tracing::info!(
            provider = self.provider.name(),
            record_count = records.len(),
            prompt_len = prompt.len(),
            "Analyzing log batch"
        );

        let response = self.provider.generate(&prompt).await.map_err(|e| {
            tracing::error!(provider = self.provider.name(), error = %e, "Provider call failed");
            e
        })?;

        tracing::debug!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            finish_reason = ?response.finish_reason,
            "Analysis complete"
        );

        Ok(AnalysisResult::success(response.text))
    }
}
