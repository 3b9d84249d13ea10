//! Request the quotation from the server within the client's time budget.
use std::time::Duration;

use log::{debug, info, warn};
use quotation_common::{QuotationError, Result};
use reqwest::StatusCode;
use tokio::time::timeout;

use crate::model::quotation::BidQuotation;

/// GET `url` and decode the bid. Connect, headers and body all count
/// against `budget`.
///
/// A `504` from the server becomes [`QuotationError::GatewayTimeout`]; the
/// client running out of its own budget becomes [`QuotationError::Timeout`].
/// Other non-success statuses are only logged and the body is decoded as is.
pub async fn request_quotation(
    client: &reqwest::Client,
    url: &str,
    budget: Duration,
) -> Result<BidQuotation> {
    info!("Requesting quotation from {}", url);

    let quotation = timeout(budget, exchange(client, url))
        .await
        .map_err(|_| QuotationError::timeout("quotation request", budget))??;

    info!("Quotation received");
    Ok(quotation)
}

async fn exchange(client: &reqwest::Client, url: &str) -> Result<BidQuotation> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if status == StatusCode::GATEWAY_TIMEOUT {
        return Err(QuotationError::GatewayTimeout);
    }
    if !status.is_success() {
        warn!("Server answered {}", status);
    }

    let body = response.bytes().await?;
    debug!("Response body: {}", String::from_utf8_lossy(&body));
    let quotation = serde_json::from_slice(&body)?;
    Ok(quotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cotacao"))
            .respond_with(response)
            .mount(&mock_server)
            .await;
        mock_server
    }

    async fn request(server: &MockServer, budget: Duration) -> Result<BidQuotation> {
        let client = reqwest::Client::new();
        request_quotation(&client, &format!("{}/cotacao", server.uri()), budget).await
    }

    #[tokio::test]
    async fn decodes_bid_from_full_quotation() {
        let server = create_mock_server(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"code":"USD","codein":"BRL","bid":"5.25","ask":"5.26"}"#),
        )
        .await;

        let quotation = request(&server, Duration::from_secs(2)).await.unwrap();

        assert_eq!(quotation.bid, "5.25");
    }

    #[tokio::test]
    async fn gateway_timeout_is_reported_as_such() {
        let server = create_mock_server(ResponseTemplate::new(504)).await;

        let err = request(&server, Duration::from_secs(2)).await.unwrap_err();

        assert!(matches!(err, QuotationError::GatewayTimeout));
        assert_eq!(err.to_string(), "quotation request timeout");
    }

    #[tokio::test]
    async fn slow_server_hits_client_budget() {
        let server = create_mock_server(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"bid":"5.25"}"#)
                .set_delay(Duration::from_millis(500)),
        )
        .await;

        let err = request(&server, Duration::from_millis(50)).await.unwrap_err();

        assert!(matches!(err, QuotationError::Timeout { .. }));
        assert_ne!(err.to_string(), QuotationError::GatewayTimeout.to_string());
    }

    #[tokio::test]
    async fn other_error_status_falls_through_to_decoding() {
        let server = create_mock_server(ResponseTemplate::new(500)).await;

        let err = request(&server, Duration::from_secs(2)).await.unwrap_err();

        assert!(matches!(err, QuotationError::SerdeJson(_)));
    }
}
