/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for mailchimp-adapter tests

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mailchimp_adapter::{ClientConfig, Mailchimp};
use wiremock::MockServer;

/// API key used across tests; the suffix would route to the us6 datacenter
pub const TEST_API_KEY: &str = "0123456789abcdef-us6";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Adapter wired to the mock server instead of the regional endpoint
pub fn test_client(server: &MockServer) -> Mailchimp {
    Mailchimp::with_config_and_base_url(TEST_API_KEY, ClientConfig::default(), &server.uri())
        .expect("test client")
}

/// The Authorization header value every request must carry
#[allow(dead_code)]
pub fn expected_basic_auth() -> String {
    format!("Basic {}", STANDARD.encode(format!("noname:{TEST_API_KEY}")))
}
