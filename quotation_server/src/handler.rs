//! `GET /cotacao`: fetch, persist, respond.
use axum::{Json, Router, extract::State, routing::get};
use log::info;
use quotation_common::Quotation;
use quotation_common::net::QUOTATION_PATH;

use crate::error::ServerError;
use crate::state::AppState;

/// Routes of the quotation server.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(QUOTATION_PATH, get(get_quotation))
        .with_state(state)
}

/// Fetch the current quotation, persist it and echo it back as JSON.
///
/// Any failure aborts the request and is rendered as an empty 504 by
/// [`ServerError`]; a failed fetch never reaches the store.
pub async fn get_quotation(State(state): State<AppState>) -> Result<Json<Quotation>, ServerError> {
    info!("Request quotation started");
    let result = fetch_and_persist(&state).await;
    info!("Request quotation ended");

    Ok(Json(result?))
}

async fn fetch_and_persist(state: &AppState) -> Result<Quotation, ServerError> {
    let quotation = state.fetcher.fetch().await?;

    let id = state
        .store
        .insert(&quotation, state.persist_timeout)
        .await?;
    info!("Quotation persisted in database with id {}", id);

    Ok(quotation)
}
