//! # Provider Configuration
//!
//! Explicit configuration values for the AI provider. Nothing in this crate
//! reads the process environment; the binary resolves flags and environment
//! variables into an [`AiConfig`] and hands it to
//! [`create_provider`](crate::providers::factory::create_provider).

use crate::constants::{DEFAULT_GEMINI_MODEL, DEFAULT_TIMEOUT_SECS, GEMINI_API_BASE};
use crate::errors::PromptError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// The supported AI provider backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Google Gemini `generateContent`.
    #[default]
    Gemini,
    /// Any OpenAI-compatible chat completions endpoint.
    Local,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Local => "local",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "local" => Ok(ProviderKind::Local),
            other => Err(PromptError::UnsupportedProvider(other.to_string())),
        }
    }
}

/// Everything needed to construct an AI provider.
#[derive(Clone)]
pub struct AiConfig {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    /// Overrides the provider's default endpoint. Required for [`ProviderKind::Local`].
    pub api_url: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            api_key: None,
            api_url: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// The API key must never reach logs.
impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AiConfig {
    /// Returns the API key if one is set and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Resolves the endpoint the provider will POST to.
    ///
    /// For Gemini the URL is derived from the model name unless overridden.
    pub fn resolved_api_url(&self) -> Result<String, PromptError> {
        if let Some(url) = self.api_url.as_deref().filter(|u| !u.trim().is_empty()) {
            return Ok(url.trim().to_string());
        }
        match self.provider {
            ProviderKind::Gemini => Ok(format!(
                "{GEMINI_API_BASE}/{model}:generateContent",
                model = self.model
            )),
            ProviderKind::Local => Err(PromptError::MissingApiUrl(self.provider.to_string())),
        }
    }
}
