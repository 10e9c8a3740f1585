use crate::services::providers::gemini::GEMINI_API_BASE;
use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

/// Credential variable checked first.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
/// Credential variable used when the primary one is unset.
pub const FALLBACK_API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub text_model: String,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl ModelConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
}

impl AnalyzerConfig {
    /// Load from the process environment. Fails when no API key is set.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = var(API_KEY_VAR)
            .or_else(|| var(FALLBACK_API_KEY_VAR))
            .ok_or_else(|| {
                AppError::ConfigError(anyhow::anyhow!(
                    "API key not set: define {} or {}",
                    API_KEY_VAR,
                    FALLBACK_API_KEY_VAR
                ))
            })?;

        let request_timeout_secs = match var("GENAI_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "GENAI_REQUEST_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                ))
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        if request_timeout_secs == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "GENAI_REQUEST_TIMEOUT_SECS must be greater than zero"
            )));
        }

        Ok(AnalyzerConfig {
            common,
            models: ModelConfig {
                text_model: var("GENAI_TEXT_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
                api_base_url: var("GEMINI_API_BASE_URL")
                    .unwrap_or_else(|| GEMINI_API_BASE.to_string()),
                request_timeout_secs,
            },
            google: GoogleConfig {
                api_key: Secret::new(api_key),
            },
        })
    }
}
