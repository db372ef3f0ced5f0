use quote_service::config::QuoteConfig;
use quote_service::services::{init_metrics, OpenAiGenerator, QuoteGenerator};
use quote_service::startup::Application;
use service_core::observability::init_tracing;
use std::sync::Arc;
use tokio::signal;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Metrics recorder must be installed before any counter is recorded
    init_metrics();

    // Configuration is loaded before anything else; a missing store URI or
    // API key aborts here, before the listener exists
    let config = QuoteConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(&config.common.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.openai.model,
        "Starting quote service"
    );

    let generator: Arc<dyn QuoteGenerator> =
        Arc::new(OpenAiGenerator::new(config.openai.clone()));

    let app = Application::build(config, generator).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tokio::select! {
        result = app.run_until_stopped() => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {}
    }

    Ok(())
}
