//! Quotation payload received from the server.
//!
//! The server answers with the full USD/BRL quotation; the client only needs
//! the bid, so every other field is ignored while decoding.
use serde::Deserialize;

/// Buy-side price of the USD/BRL quotation.
#[derive(Debug, Clone, Deserialize)]
pub struct BidQuotation {
    /// Bid as sent by the server (e.g. `5.2594`).
    pub bid: String,
}
