//! Mock generation provider for testing.

use super::{GeneratorError, QuoteGenerator};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock quote generator. Records how many times it was called so tests can
/// assert the provider was (or was not) reached.
pub struct MockQuoteGenerator {
    response: String,
    fail: bool,
    calls: AtomicUsize,
}

impl MockQuoteGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A generator whose every call fails with an API error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteGenerator for MockQuoteGenerator {
    async fn generate(&self, _category: &str, _topic: &str) -> Result<String, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(GeneratorError::Api(
                "Mock provider configured to fail".to_string(),
            ));
        }

        Ok(self.response.trim().to_string())
    }
}
