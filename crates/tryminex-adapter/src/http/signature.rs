/*
[INPUT]:  HTTP method, API path, request parameters and the API secret
[OUTPUT]: Hex-encoded HMAC-SHA256 request signature (`sign` parameter)
[POS]:    HTTP layer - request signing for private endpoints
[UPDATE]: When changing signing algorithm or canonical string format
*/

use hmac::{Hmac, Mac};
use reqwest::Method;
use sha2::Sha256;
use std::fmt;

use crate::types::Params;

type HmacSha256 = Hmac<Sha256>;

/// Parameter name carrying the signature
pub const SIGN_PARAM: &str = "sign";

/// Signs private requests with the account secret
#[derive(Clone)]
pub struct RequestSigner {
    secret: Vec<u8>,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl RequestSigner {
    /// Create a new request signer with the given secret
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Build the canonical string that gets signed.
    ///
    /// Format: `METHOD&path` followed by `&key=value` for every parameter in
    /// byte-wise key order. No parameters means no trailing `&`.
    pub fn signing_string(method: &Method, path: &str, params: &Params) -> String {
        let mut message = format!("{}&{}", method.as_str(), path);
        for (key, value) in params {
            message.push('&');
            message.push_str(key);
            message.push('=');
            message.push_str(&value.to_string());
        }
        message
    }

    /// Sign a request, returning lowercase hex HMAC-SHA256
    pub fn sign(&self, method: &Method, path: &str, params: &Params) -> String {
        hmac_hex(&self.secret, &Self::signing_string(method, path, params))
    }
}

fn hmac_hex(secret: &[u8], message: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
