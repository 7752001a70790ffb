//! # AI Provider Factory
//!
//! Turns an explicit [`AiConfig`] into a ready-to-use provider. Any missing
//! configuration is reported here, before a client exists and therefore before
//! any request could be made.

use crate::{
    config::{AiConfig, ProviderKind},
    errors::PromptError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
};
use tracing::info;

/// Creates the AI provider described by `config`.
///
/// - Gemini requires an API key; the endpoint is derived from the model name
///   unless `api_url` overrides it.
/// - The local provider requires an `api_url`; the API key is optional.
pub fn create_provider(config: &AiConfig) -> Result<Box<dyn AiProvider>, PromptError> {
    let provider: Box<dyn AiProvider> = match config.provider {
        ProviderKind::Gemini => {
            let api_key = config.api_key().ok_or(PromptError::MissingApiKey)?;
            let api_url = config.resolved_api_url()?;
            info!(model = %config.model, "Configuring Gemini provider");
            Box::new(GeminiProvider::new(
                api_url,
                api_key.to_string(),
                config.timeout,
            )?)
        }
        ProviderKind::Local => {
            let api_url = config.resolved_api_url()?;
            info!(api_url = %api_url, model = %config.model, "Configuring local AI provider");
            Box::new(LocalAiProvider::new(
                api_url,
                config.api_key().map(String::from),
                Some(config.model.clone()),
                config.timeout,
            )?)
        }
    };

    Ok(provider)
}
