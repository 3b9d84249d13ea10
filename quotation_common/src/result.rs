//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `QuotationError`, so functions can simply return `Result<T>`.
use crate::error::QuotationError;

/// Workspace-wide `Result` alias with `QuotationError` as the default error.
pub type Result<T, E = QuotationError> = std::result::Result<T, E>;
