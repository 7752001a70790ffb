//! # Natural Language to SQL
//!
//! This crate converts a natural-language question into a single SQL SELECT
//! statement, using a schema file as grounding context and a configurable AI
//! provider as the translation engine. The generated SQL is never executed.

pub mod config;
pub mod constants;
pub mod errors;
pub mod prompts;
pub mod providers;
pub mod sanitize;
pub mod schema;
pub mod types;

pub use config::{AiConfig, ProviderKind};
pub use errors::{ErrorKind, PromptError};
pub use types::{PromptClient, PromptClientBuilder};

use constants::UNANSWERABLE_SENTINEL;
use prompts::build_prompt;
use sanitize::strip_code_fence;
use tracing::{debug, info, warn};

impl PromptClient {
    /// Generates a SQL statement answering `question` against `schema`.
    ///
    /// Builds the prompt, makes exactly one call to the AI provider and strips
    /// any code fence from the answer. The result is not validated beyond
    /// being non-empty; an answer of `ERROR` means the model judged the
    /// question unanswerable from the schema.
    pub async fn generate_sql(&self, schema: &str, question: &str) -> Result<String, PromptError> {
        info!("[generate_sql] received question: {:?}", question);

        let payload = build_prompt(schema, question);
        debug!(system_prompt = %payload.system_prompt(), user_prompt = %payload.question(), "--> Sending prompts to AI Provider");

        let raw_response = self
            .ai_provider
            .generate(payload.system_prompt(), payload.question())
            .await?;

        debug!("<-- Query from AI: {}", &raw_response);

        let sql = strip_code_fence(&raw_response);

        if sql.is_empty() {
            return Err(PromptError::UnexpectedResponseShape(
                "AI provider returned empty text".to_string(),
            ));
        }
        if sql.eq_ignore_ascii_case(UNANSWERABLE_SENTINEL) {
            return Err(PromptError::Unanswerable);
        }

        let upper = sql.to_uppercase();
        if !upper.starts_with("SELECT") && !upper.starts_with("WITH") {
            warn!("[generate_sql] response does not look like a SELECT statement");
        }

        Ok(sql)
    }
}
