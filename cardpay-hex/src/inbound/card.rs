//! HTTP adapter for the card service.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use cardpay_types::{AccountStatusCache, AppError, CardId, CardRepository, CreateCardRequest};

use super::{ApiError, health};
use crate::CardService;

/// Application state shared across handlers.
pub struct CardState<CR: CardRepository, AC: AccountStatusCache> {
    pub service: CardService<CR, AC>,
}

/// Builds the card service router.
pub fn router<CR: CardRepository, AC: AccountStatusCache>(
    service: CardService<CR, AC>,
) -> Router {
    let state = Arc::new(CardState { service });

    Router::new()
        .route("/health", get(health))
        .route("/cards", get(list_cards::<CR, AC>).post(issue_card::<CR, AC>))
        .route("/cards/by-number", get(get_card_by_number::<CR, AC>))
        .route("/cards/by-account", get(get_cards_by_account::<CR, AC>))
        .route(
            "/cards/{id}",
            get(get_card::<CR, AC>).delete(delete_card::<CR, AC>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ByNumberQuery {
    card_number: String,
}

#[derive(Debug, Deserialize)]
struct ByAccountQuery {
    account_id: String,
}

#[tracing::instrument(skip(state, req))]
async fn issue_card<CR: CardRepository, AC: AccountStatusCache>(
    State(state): State<Arc<CardState<CR, AC>>>,
    Json(req): Json<CreateCardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let card = state.service.issue(req).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

#[tracing::instrument(skip(state))]
async fn list_cards<CR: CardRepository, AC: AccountStatusCache>(
    State(state): State<Arc<CardState<CR, AC>>>,
) -> Result<impl IntoResponse, ApiError> {
    let cards = state.service.list().await?;
    Ok(Json(cards))
}

#[tracing::instrument(skip(state), fields(card_id = %id))]
async fn get_card<CR: CardRepository, AC: AccountStatusCache>(
    State(state): State<Arc<CardState<CR, AC>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CardId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid card ID".into()))?;

    let card = state.service.get_by_id(id).await?;
    Ok(Json(card))
}

#[tracing::instrument(skip(state, query))]
async fn get_card_by_number<CR: CardRepository, AC: AccountStatusCache>(
    State(state): State<Arc<CardState<CR, AC>>>,
    Query(query): Query<ByNumberQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let card = state.service.get_by_number(&query.card_number).await?;
    Ok(Json(card))
}

#[tracing::instrument(skip(state, query))]
async fn get_cards_by_account<CR: CardRepository, AC: AccountStatusCache>(
    State(state): State<Arc<CardState<CR, AC>>>,
    Query(query): Query<ByAccountQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let cards = state.service.get_by_account(&query.account_id).await?;
    Ok(Json(cards))
}

#[tracing::instrument(skip(state), fields(card_id = %id))]
async fn delete_card<CR: CardRepository, AC: AccountStatusCache>(
    State(state): State<Arc<CardState<CR, AC>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CardId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid card ID".into()))?;

    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
