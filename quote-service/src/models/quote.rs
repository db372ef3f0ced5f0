use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author recorded when a quote is created without one.
pub const DEFAULT_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    pub author: String,
    pub category: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(text: String, author: Option<String>, category: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            author: author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            category,
            created_at: Utc::now(),
        }
    }
}
