pub mod ai;
pub mod health;
pub mod quotes;

pub use ai::{generate_ai_quote, routes_check};
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use quotes::{create_quote, list_quotes, list_quotes_by_category};
