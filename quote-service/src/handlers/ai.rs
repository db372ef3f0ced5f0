use crate::dtos::{AiQuoteRequest, AiQuoteResponse};
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;

/// Generate an ephemeral AI quote. The result is returned to the caller and
/// never persisted.
pub async fn generate_ai_quote(
    State(state): State<AppState>,
    Json(payload): Json<AiQuoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Presence check happens before the provider is reached
    let category = payload
        .category
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("Category and topic required".to_string()))?;
    let topic = payload
        .topic
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Category and topic required".to_string()))?;

    let text = state.generator.generate(&category, &topic).await?;

    metrics::counter!("ai_quotes_generated_total").increment(1);

    Ok(Json(AiQuoteResponse::new(text)))
}

/// Smoke-test probe confirming the AI route is wired up.
pub async fn routes_check() -> &'static str {
    "AI route exists"
}
