//! Shared networking constants and helpers used by client and server.
use std::time::Duration;

/// TCP port the quotation server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Route serving the latest quotation.
pub const QUOTATION_PATH: &str = "/cotacao";
/// Third-party endpoint returning the USD/BRL quotation envelope.
pub const EXTERNAL_QUOTATION_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Default client target.
pub const SERVER_QUOTATION_URL: &str = "http://localhost:8080/cotacao";

/// Budget for the server's call to the external API.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(200);
/// Budget for the server's database insert.
pub const PERSIST_TIMEOUT: Duration = Duration::from_millis(10);
/// Budget for the whole client request.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);

/// Helper to format an IPv4 address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_shrink_down_the_chain() {
        assert!(CLIENT_TIMEOUT > FETCH_TIMEOUT);
        assert!(FETCH_TIMEOUT > PERSIST_TIMEOUT);
    }

    #[test]
    fn default_client_url_targets_default_server() {
        let expected = format!("http://{}{}", addr("localhost", SERVER_PORT), QUOTATION_PATH);
        assert_eq!(SERVER_QUOTATION_URL, expected);
    }
}
