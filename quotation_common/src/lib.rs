//!
//! Common types and utilities shared by the quotation server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuotationError` used across the workspace.
//! - `result` — handy `Result<T, QuotationError>` alias.
//! - `quotation` — the USD/BRL quotation payload and the external API envelope.
//! - `net` — addresses, paths and timeout defaults shared by both processes.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quotation;
pub mod result;

pub use error::QuotationError;
pub use quotation::Quotation;
pub use result::Result;
