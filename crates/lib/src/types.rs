use crate::errors::PromptError;
use crate::providers::ai::AiProvider;
use std::fmt;

/// A client that turns natural-language questions into SQL using an AI provider.
pub struct PromptClient {
    pub(crate) ai_provider: Box<dyn AiProvider>,
}

impl fmt::Debug for PromptClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptClient")
            .field("ai_provider", &self.ai_provider)
            .finish()
    }
}

/// A builder for creating `PromptClient` instances.
#[derive(Default)]
pub struct PromptClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
}

impl PromptClientBuilder {
    /// Creates a new `PromptClientBuilder`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nl2sql::PromptClientBuilder;
    ///
    /// let builder = PromptClientBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Builds the `PromptClient`.
    ///
    /// Returns [`PromptError::MissingAiProvider`] if no provider was set.
    pub fn build(self) -> Result<PromptClient, PromptError> {
        let ai_provider = self.ai_provider.ok_or(PromptError::MissingAiProvider)?;
        Ok(PromptClient { ai_provider })
    }
}
