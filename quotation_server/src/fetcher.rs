//! Client for the external quotation API.
use std::time::Duration;

use log::debug;
use quotation_common::quotation::QuotationEnvelope;
use quotation_common::{Quotation, QuotationError};
use reqwest::Url;
use tokio::time::timeout;

use crate::error::ServerError;

/// Fetches the current USD/BRL quotation within a fixed time budget.
#[derive(Clone)]
pub struct QuotationFetcher {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl QuotationFetcher {
    /// Build a fetcher for `url`. An unparsable URL is rejected here rather
    /// than on the first request.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, QuotationError> {
        let url = Url::parse(url).map_err(|e| QuotationError::Format(format!("{url}: {e}")))?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("quotation_server/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    /// GET the envelope and unwrap the quotation. The whole exchange,
    /// body included, counts against the budget.
    pub async fn fetch(&self) -> Result<Quotation, ServerError> {
        debug!("Requesting quotation from {}", self.url);

        let body = timeout(self.timeout, self.request_body())
            .await
            .map_err(|_| ServerError::FetchTimeout(self.timeout))??;

        let quotation = QuotationEnvelope::from_json_bytes(&body)?.into_quotation();
        debug!("Received quotation with bid {}", quotation.bid);
        Ok(quotation)
    }

    async fn request_body(&self) -> Result<Vec<u8>, QuotationError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
