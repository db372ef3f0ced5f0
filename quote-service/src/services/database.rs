use crate::dtos::CreateQuoteRequest;
use crate::models::Quote;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{Collation, CollationStrength, FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

/// Collation used for category matching: strength 2 compares base letters
/// and diacritics but ignores case, giving an anchored case-insensitive
/// equality without interpreting the input as a pattern.
fn category_collation() -> Collation {
    Collation::builder()
        .locale("en")
        .strength(CollationStrength::Secondary)
        .build()
}

#[derive(Clone)]
pub struct QuoteStore {
    client: MongoClient,
    db: Database,
}

impl QuoteStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for quote-service");

        // Collation index on category so the filter endpoint's
        // case-insensitive lookup stays an index scan
        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1 })
            .options(
                IndexOptions::builder()
                    .name("category_lookup".to_string())
                    .collation(category_collation())
                    .build(),
            )
            .build();

        self.quotes()
            .create_index(category_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create category index on quotes collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on quotes.category");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn quotes(&self) -> Collection<Quote> {
        self.db.collection("quotes")
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// All quotes in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Quote>, AppError> {
        let mut cursor = self
            .quotes()
            .find(None, None)
            .await
            .map_err(AppError::from)?;

        let mut quotes = Vec::new();
        while let Some(quote) = cursor.try_next().await.map_err(AppError::from)? {
            quotes.push(quote);
        }
        Ok(quotes)
    }

    /// Quotes whose category equals `category`, compared case-insensitively
    /// over the whole string. The input is never compiled as a pattern, so
    /// regex metacharacters match literally.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Quote>, AppError> {
        let options = FindOptions::builder()
            .collation(category_collation())
            .build();

        let mut cursor = self
            .quotes()
            .find(doc! { "category": category }, options)
            .await
            .map_err(AppError::from)?;

        let mut quotes = Vec::new();
        while let Some(quote) = cursor.try_next().await.map_err(AppError::from)? {
            quotes.push(quote);
        }
        Ok(quotes)
    }

    /// Persist a new quote. The store client is the sole enforcer of the
    /// schema: `text` and `category` must be present and non-empty, `author`
    /// falls back to the explicit default.
    pub async fn create(&self, draft: CreateQuoteRequest) -> Result<Quote, AppError> {
        let text = draft
            .text
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Validation("text is required".to_string()))?;
        let category = draft
            .category
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::Validation("category is required".to_string()))?;

        let quote = Quote::new(text, draft.author, category);

        self.quotes()
            .insert_one(&quote, None)
            .await
            .map_err(AppError::from)?;

        tracing::info!(
            quote_id = %quote.id,
            category = %quote.category,
            "Quote created"
        );

        Ok(quote)
    }
}
