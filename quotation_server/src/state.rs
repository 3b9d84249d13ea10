use std::sync::Arc;
use std::time::Duration;

use crate::fetcher::QuotationFetcher;
use crate::store::QuotationStore;

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: QuotationFetcher,
    pub store: Arc<dyn QuotationStore>,
    pub persist_timeout: Duration,
}
