use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the application.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Request to AI provider failed: {0}")]
    AiRequest(reqwest::Error),
    #[error("AI provider returned HTTP {status}: {body}")]
    AiApi { status: u16, body: String },
    #[error("AI provider blocked the prompt: {0}")]
    PromptBlocked(String),
    #[error("Unexpected response shape from AI provider: {0}")]
    UnexpectedResponseShape(String),
    #[error("The question cannot be answered using the provided schema")]
    Unanswerable,
    #[error("API key is missing")]
    MissingApiKey,
    #[error("API URL is missing for the '{0}' provider")]
    MissingApiUrl(String),
    #[error("Unsupported AI provider: {0}")]
    UnsupportedProvider(String),
    #[error("AI provider is missing")]
    MissingAiProvider,
    #[error("Failed to read schema file at {}: {source}", .path.display())]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Schema file at {} is empty", .0.display())]
    EmptySchema(PathBuf),
    #[error("Failed to write output: {0}")]
    Output(std::io::Error),
}

/// The coarse category of a [`PromptError`].
///
/// Lets callers tell "the provider rejected us" apart from "the provider
/// changed its response format" without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid local setup, detected before any network activity.
    Configuration,
    /// Connection refused, DNS failure, timeout.
    Transport,
    /// Non-success status or a refusal reported by the provider.
    Provider,
    /// JSON was returned but did not contain the expected fields.
    ResponseShape,
    Internal,
}

impl PromptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PromptError::MissingApiKey
            | PromptError::MissingApiUrl(_)
            | PromptError::UnsupportedProvider(_)
            | PromptError::MissingAiProvider
            | PromptError::SchemaRead { .. }
            | PromptError::EmptySchema(_) => ErrorKind::Configuration,
            PromptError::AiRequest(_) => ErrorKind::Transport,
            PromptError::AiApi { .. } | PromptError::PromptBlocked(_) | PromptError::Unanswerable => {
                ErrorKind::Provider
            }
            PromptError::UnexpectedResponseShape(_) => ErrorKind::ResponseShape,
            PromptError::ReqwestClientBuild(_) | PromptError::Output(_) => ErrorKind::Internal,
        }
    }
}
