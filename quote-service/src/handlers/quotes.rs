use crate::dtos::{CreateQuoteRequest, QuoteResponse};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

pub async fn list_quotes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let quotes = state.db.list_all().await?;
    let quotes: Vec<QuoteResponse> = quotes.into_iter().map(QuoteResponse::from).collect();
    Ok(Json(quotes))
}

pub async fn list_quotes_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quotes = state.db.list_by_category(&category).await?;
    let quotes: Vec<QuoteResponse> = quotes.into_iter().map(QuoteResponse::from).collect();
    Ok(Json(quotes))
}

pub async fn create_quote(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let quote = state.db.create(payload).await?;

    metrics::counter!("quotes_created_total").increment(1);

    Ok((StatusCode::CREATED, Json(QuoteResponse::from(quote))))
}
