//! USD/BRL quotation data model and JSON helpers.
//!
//! The external API wraps the quotation in an envelope keyed by the currency
//! pair (`{"USDBRL": {...}}`). The server unwraps it and hands the inner
//! `Quotation` back to its own callers with the same field names, so both
//! directions share this one type. Every field is kept as the API's string
//! representation; nothing is parsed into numbers.
use serde::{Deserialize, Serialize};

use crate::error::QuotationError;

/// Snapshot of the USD/BRL exchange rate and related metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    /// Base currency code (e.g. `USD`).
    pub code: String,
    /// Quote currency code (e.g. `BRL`).
    #[serde(rename = "codein")]
    pub code_in: String,
    /// Human-readable pair name.
    pub name: String,
    /// Session high.
    pub high: String,
    /// Session low.
    pub low: String,
    /// Absolute bid variation.
    #[serde(rename = "varBid")]
    pub var_bid: String,
    /// Percent change.
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// Buy-side price.
    pub bid: String,
    /// Sell-side price.
    pub ask: String,
    /// Unix timestamp of the quote, as sent by the API.
    pub timestamp: String,
    /// Creation date of the quote, as sent by the API.
    pub create_date: String,
}

/// Response envelope of the external quotation API.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotationEnvelope {
    /// The USD/BRL quotation.
    #[serde(rename = "USDBRL")]
    pub usdbrl: Quotation,
}

impl QuotationEnvelope {
    /// Decode an envelope from raw JSON bytes.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, QuotationError> {
        let envelope = serde_json::from_slice(bytes)?;
        Ok(envelope)
    }

    /// Unwrap the inner quotation.
    pub fn into_quotation(self) -> Quotation {
        self.usdbrl
    }
}
