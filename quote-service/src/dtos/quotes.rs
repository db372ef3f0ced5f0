use crate::models::Quote;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub identity: String,
    pub text: String,
    pub author: String,
    pub category: String,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            identity: quote.id,
            text: quote.text,
            author: quote.author,
            category: quote.category,
        }
    }
}

/// Creation payload. Fields are optional at the wire level so that a missing
/// field reaches the store client's validation and comes back as a 400
/// rather than failing JSON extraction.
#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    pub text: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AiQuoteRequest {
    pub category: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AiQuoteResponse {
    pub text: String,
    pub author: String,
}

impl AiQuoteResponse {
    pub fn new(text: String) -> Self {
        Self {
            text,
            author: "AI".to_string(),
        }
    }
}
