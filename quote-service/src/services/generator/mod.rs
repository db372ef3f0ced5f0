//! Quote generation provider abstraction.
//!
//! A trait seam over the external text-generation service so the HTTP layer
//! takes an injected `Arc<dyn QuoteGenerator>` and tests can substitute a
//! mock provider.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

pub use mock::MockQuoteGenerator;
pub use openai::OpenAiGenerator;

/// Error type for generation provider operations.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("No usable completion returned")]
    EmptyCompletion,
}

impl From<GeneratorError> for AppError {
    fn from(err: GeneratorError) -> Self {
        AppError::GenerationError(anyhow::Error::new(err))
    }
}

/// Trait for quote text generation providers.
#[async_trait]
pub trait QuoteGenerator: Send + Sync {
    /// Produce a short quote for the given category and topic. The returned
    /// text is trimmed of surrounding whitespace. Output is not
    /// deterministic: identical inputs may yield different text.
    async fn generate(&self, category: &str, topic: &str) -> Result<String, GeneratorError>;
}

/// Prompt sent as the user message of the two-message exchange.
pub(crate) fn build_prompt(category: &str, topic: &str) -> String {
    format!(
        "Generate a short inspirational quote.\n\
         Category: {}\n\
         Topic: {}\n\
         Keep it under 25 words.\n\
         Return only the quote text.",
        category, topic
    )
}

/// System message fixing the assistant's persona.
pub(crate) const SYSTEM_PROMPT: &str = "You are a creative quote generator.";

/// Response length bound passed to the provider. The word limit itself is
/// enforced by the model, not by this system.
pub(crate) const MAX_COMPLETION_TOKENS: u32 = 60;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_category_and_topic() {
        let prompt = build_prompt("wisdom", "patience");
        assert!(prompt.contains("Category: wisdom"));
        assert!(prompt.contains("Topic: patience"));
        assert!(prompt.contains("under 25 words"));
    }
}
