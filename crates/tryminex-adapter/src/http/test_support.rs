/*
[INPUT]:  Requests recorded by the wiremock server
[OUTPUT]: Signed test client and matchers that verify signed request parameters
[POS]:    HTTP layer - shared unit test helpers
[UPDATE]: When the signing scheme or parameter placement changes
*/

use reqwest::Method;
use wiremock::{Match, Request};

use crate::http::signature::{RequestSigner, SIGN_PARAM};
use crate::http::{ClientConfig, Credentials, TryminexClient};
use crate::types::Params;
use wiremock::MockServer;

pub const TEST_APPID: &str = "app-1";
pub const TEST_SECRET: &[u8] = b"secret";

/// Client pointed at the mock server with the test credentials
pub fn signed_client(server: &MockServer) -> TryminexClient {
    TryminexClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
        .with_credentials(Credentials::new(TEST_APPID, TEST_SECRET))
}

/// Where the signed parameters are expected
#[derive(Debug, Clone, Copy)]
enum Placement {
    Query,
    FormBody,
}

/// Matches requests whose parameters carry a valid signature for the test
/// credentials, and nothing in the other location.
pub struct SignedParams {
    placement: Placement,
}

impl SignedParams {
    pub fn in_query() -> Self {
        Self {
            placement: Placement::Query,
        }
    }

    pub fn in_form_body() -> Self {
        Self {
            placement: Placement::FormBody,
        }
    }
}

/// Collect url-encoded pairs as string parameters
pub fn decode_params(encoded: &[u8]) -> Params {
    url::form_urlencoded::parse(encoded)
        .map(|(key, value)| (key.into_owned(), value.into_owned().into()))
        .collect()
}

impl Match for SignedParams {
    fn matches(&self, request: &Request) -> bool {
        let query = request.url.query().unwrap_or_default().as_bytes();
        let (mut params, other_empty) = match self.placement {
            Placement::Query => (decode_params(query), request.body.is_empty()),
            Placement::FormBody => (decode_params(&request.body), query.is_empty()),
        };
        if !other_empty {
            return false;
        }

        let Some(signature) = params.remove(SIGN_PARAM) else {
            return false;
        };
        let has_common = params.get("appid").map(ToString::to_string).as_deref() == Some(TEST_APPID)
            && params.contains_key("nonce")
            && params.contains_key("timestamp");
        let Ok(method) = Method::from_bytes(request.method.as_str().as_bytes()) else {
            return false;
        };
        let expected = RequestSigner::new(TEST_SECRET).sign(&method, request.url.path(), &params);

        has_common && signature.to_string() == expected
    }
}
