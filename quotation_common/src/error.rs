//! Error types shared between client and server.
//!
//! The `QuotationError` enum unifies the failure cases of the HTTP exchanges
//! on both sides of the chain (external API -> server, server -> client) and
//! of the local file output, so each binary can propagate a single error type.
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuotationError {
    /// I/O error originating from the standard library (files, sockets).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Transport-level HTTP failure (connect, TLS, body read, bad URL).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A bounded operation did not finish within its budget.
    #[error("{operation} timed out after {elapsed:?}")]
    Timeout {
        /// Short name of the operation that was cut off.
        operation: &'static str,
        /// The budget that was exceeded.
        elapsed: Duration,
    },

    /// The server answered 504 Gateway Timeout.
    #[error("quotation request timeout")]
    GatewayTimeout,

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}

impl QuotationError {
    /// Builds a [`QuotationError::Timeout`] for `operation` bounded by `elapsed`.
    pub fn timeout(operation: &'static str, elapsed: Duration) -> Self {
        QuotationError::Timeout { operation, elapsed }
    }

    /// Returns `true` for either flavour of timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            QuotationError::Timeout { .. } | QuotationError::GatewayTimeout
        )
    }
}
