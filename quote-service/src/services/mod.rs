pub mod database;
pub mod generator;
pub mod metrics;

pub use database::QuoteStore;
pub use generator::{GeneratorError, MockQuoteGenerator, OpenAiGenerator, QuoteGenerator};
pub use metrics::{get_metrics, init_metrics};
