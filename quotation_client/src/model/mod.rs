//! Data model types exchanged with the quotation server.
//!
//! - `quotation` — the single-field payload the client keeps from the
//!   server's response.
pub mod quotation;
