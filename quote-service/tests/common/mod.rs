use quote_service::config::QuoteConfig;
use quote_service::services::{MockQuoteGenerator, QuoteGenerator, QuoteStore};
use quote_service::startup::Application;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db: QuoteStore,
}

impl TestApp {
    /// Spawn the app with a canned mock generator. Tests that need to
    /// inspect or fail the provider build their own and use
    /// `spawn_with_generator`.
    pub async fn spawn() -> Self {
        let generator: Arc<dyn QuoteGenerator> = Arc::new(MockQuoteGenerator::new(
            "Every mountain top is within reach if you just keep climbing.",
        ));
        Self::spawn_with_generator(generator).await
    }

    pub async fn spawn_with_generator(generator: Arc<dyn QuoteGenerator>) -> Self {
        if std::env::var("MONGODB_URI").is_err() {
            std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        }
        std::env::set_var("OPENAI_API_KEY", "test-key");

        let mut config = QuoteConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = format!("quote_test_{}", Uuid::new_v4());

        let app = Application::build(config, generator)
            .await
            .expect("Failed to build test application");

        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, db }
    }

    /// Drop the per-test database.
    pub async fn cleanup(&self) {
        self.db.database().drop(None).await.ok();
    }
}
