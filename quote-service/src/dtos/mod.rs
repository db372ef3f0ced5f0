pub mod quotes;

pub use quotes::{AiQuoteRequest, AiQuoteResponse, CreateQuoteRequest, QuoteResponse};
