//! Domain models owned by the quotation server.
//!
//! - `record` — persisted quotation rows as read back from the local store.
//!   The request-path `Quotation` itself lives in `quotation_common`.

pub mod record;
