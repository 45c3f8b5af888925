/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for tryminex-adapter tests

use tryminex_adapter::{ClientConfig, Credentials, Params, RequestSigner, TryminexClient};
use wiremock::MockServer;
use wiremock::Request;

pub const APPID: &str = "123456789";
pub const SECRET: &[u8] = b"123456789";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with test credentials
pub fn signed_client(server: &MockServer) -> TryminexClient {
    TryminexClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
        .with_credentials(Credentials::new(APPID, SECRET))
}

/// Decode url-encoded parameters into string values
pub fn decode(encoded: &[u8]) -> Params {
    url::form_urlencoded::parse(encoded)
        .map(|(key, value)| (key.into_owned(), value.into_owned().into()))
        .collect()
}

/// Recompute the signature the server would expect for `params`
pub fn verify_signature(request: &Request, params: &Params) -> bool {
    let mut unsigned = params.clone();
    let Some(signature) = unsigned.remove("sign") else {
        return false;
    };
    let method = match request.method.as_str() {
        "POST" => reqwest::Method::POST,
        _ => reqwest::Method::GET,
    };
    RequestSigner::new(SECRET).sign(&method, request.url.path(), &unsigned) == signature.to_string()
}
