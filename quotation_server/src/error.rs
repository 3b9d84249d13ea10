//! Request-path errors of the quotation server.
//!
//! Every variant is rendered as `504 Gateway Timeout` with an empty body: the
//! caller cannot tell an external-API failure from a local timeout.
use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use quotation_common::QuotationError;
use thiserror::Error;

/// Failure of one `GET /cotacao` request.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("API request timed out after {0:?}")]
    FetchTimeout(Duration),

    #[error("API request failed: {0}")]
    Fetch(#[from] QuotationError),

    #[error("Persist timed out after {0:?}")]
    PersistTimeout(Duration),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("{}", self);
        StatusCode::GATEWAY_TIMEOUT.into_response()
    }
}
