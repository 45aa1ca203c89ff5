//! HTTP adapter for the account service.

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

use cardpay_types::{
    AccountId, AccountRepository, AppError, CreateAccountRequest, UpdateAccountRequest,
};

use super::{ApiError, health};
use crate::AccountService;

/// Application state shared across handlers.
pub struct AccountState<R: AccountRepository> {
    pub service: AccountService<R>,
}

/// Builds the account service router.
pub fn router<R: AccountRepository>(service: AccountService<R>) -> Router {
    let state = Arc::new(AccountState { service });

    Router::new()
        .route("/health", get(health))
        .route(
            "/accounts",
            get(list_accounts::<R>).post(create_account::<R>),
        )
        .route("/accounts/by-number", get(get_account_by_number::<R>))
        .route(
            "/accounts/{id}",
            get(get_account::<R>)
                .put(update_account::<R>)
                .delete(delete_account::<R>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ByNumberQuery {
    account_number: String,
}

#[tracing::instrument(skip(state, req))]
async fn create_account<R: AccountRepository>(
    State(state): State<Arc<AccountState<R>>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state.service.create(req).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

#[tracing::instrument(skip(state))]
async fn list_accounts<R: AccountRepository>(
    State(state): State<Arc<AccountState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let accounts = state.service.list().await?;
    Ok(Json(accounts))
}

#[tracing::instrument(skip(state), fields(account_id = %id))]
async fn get_account<R: AccountRepository>(
    State(state): State<Arc<AccountState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: AccountId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid account ID".into()))?;

    let account = state.service.get_by_id(id).await?;
    Ok(Json(account))
}

#[tracing::instrument(skip(state, query))]
async fn get_account_by_number<R: AccountRepository>(
    State(state): State<Arc<AccountState<R>>>,
    Query(query): Query<ByNumberQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state.service.get_by_number(&query.account_number).await?;
    Ok(Json(account))
}

#[tracing::instrument(skip(state, req), fields(account_id = %id))]
async fn update_account<R: AccountRepository>(
    State(state): State<Arc<AccountState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: AccountId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid account ID".into()))?;

    let account = state.service.update(id, req).await?;
    Ok(Json(account))
}

#[tracing::instrument(skip(state), fields(account_id = %id))]
async fn delete_account<R: AccountRepository>(
    State(state): State<Arc<AccountState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: AccountId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid account ID".into()))?;

    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
