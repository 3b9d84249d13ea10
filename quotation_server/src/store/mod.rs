//! Local persistence of quotations.
//!
//! The handler only sees the `QuotationStore` trait through `AppState`; the
//! concrete SQLite store is built once in `main`.
use std::time::Duration;

use async_trait::async_trait;
use quotation_common::Quotation;

use crate::error::ServerError;

pub mod sqlite;

pub use sqlite::SqliteStore;

/// Append-only sink for quotations.
#[async_trait]
pub trait QuotationStore: Send + Sync {
    /// Persist one quotation within `budget` and return its row id.
    ///
    /// Running out of budget yields [`ServerError::PersistTimeout`] and must
    /// leave nothing behind in the store.
    async fn insert(&self, quotation: &Quotation, budget: Duration) -> Result<i64, ServerError>;
}
