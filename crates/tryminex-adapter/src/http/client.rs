/*
[INPUT]:  HTTP configuration (base URL, timeouts) and API credentials
[OUTPUT]: Configured client issuing public and signed requests, JSON responses
[POS]:    HTTP layer - core client implementation and transport
[UPDATE]: When adding connection options or changing request/response handling
*/

use chrono::{DateTime, Utc};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use crate::http::signature::{RequestSigner, SIGN_PARAM};
use crate::http::{Result, TryminexError};
use crate::types::Params;

/// Base URL for the Tryminex API
pub const DEFAULT_BASE_URL: &str = "https://api.tryminex.com";

/// Verbs accepted by signed endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignedMethod {
    /// Parameters go in the query string
    Get,
    /// Parameters go in a form body
    Post,
}

impl SignedMethod {
    pub fn as_method(&self) -> Method {
        match self {
            SignedMethod::Get => Method::GET,
            SignedMethod::Post => Method::POST,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Client-wide timeout, applies to public requests
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    #[serde(with = "duration_secs")]
    pub connect_timeout: Duration,
    /// Per-request timeout for signed requests
    #[serde(with = "duration_secs")]
    pub signed_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            signed_timeout: Duration::from_secs(3),
        }
    }
}

impl ClientConfig {
    /// Parse configuration from YAML, missing fields take their defaults
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|err| TryminexError::Config(err.to_string()))
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|err| TryminexError::Config(format!("{}: {err}", path.display())))?;
        Self::from_yaml_str(&content)
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

/// Credentials for signed requests
#[derive(Clone)]
pub struct Credentials {
    appid: String,
    secret: Vec<u8>,
}

impl Credentials {
    pub fn new(appid: impl Into<String>, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            appid: appid.into(),
            secret: secret.into(),
        }
    }

    pub fn appid(&self) -> &str {
        &self.appid
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("appid", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[derive(Clone)]
struct Account {
    appid: String,
    signer: RequestSigner,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("appid", &"<redacted>")
            .field("signer", &self.signer)
            .finish()
    }
}

/// Main HTTP client for the Tryminex API
#[derive(Debug)]
pub struct TryminexClient {
    http_client: Client,
    base_url: Url,
    timeout: Duration,
    signed_timeout: Duration,
    account: Option<Account>,
}

impl TryminexClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.clone();
        Self::with_config_and_base_url(config, &base_url)
    }

    /// Create a new client with custom configuration against another host
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            timeout: config.timeout,
            signed_timeout: config.signed_timeout,
            account: None,
        })
    }

    /// Attach credentials for signed requests
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.account = Some(Account {
            signer: RequestSigner::new(credentials.secret),
            appid: credentials.appid,
        });
        self
    }

    /// Whether signed endpoints can be called
    pub fn has_credentials(&self) -> bool {
        self.account.is_some()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default timeout for signed requests
    pub fn signed_timeout(&self) -> Duration {
        self.signed_timeout
    }

    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Issue an unsigned request, parameters always go in the query string
    pub async fn public_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
    ) -> Result<Value> {
        debug!(method = %method, endpoint, "public request");
        let mut builder = self.http_client.request(method, self.url(endpoint)?);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        self.send_json(builder, self.timeout).await
    }

    /// Issue a signed GET with the default signed timeout
    pub async fn signed_get(&self, endpoint: &str, params: Params) -> Result<Value> {
        self.signed_request(SignedMethod::Get, endpoint, params, self.signed_timeout)
            .await
    }

    /// Issue a signed POST with the default signed timeout
    pub async fn signed_post(&self, endpoint: &str, params: Params) -> Result<Value> {
        self.signed_request(SignedMethod::Post, endpoint, params, self.signed_timeout)
            .await
    }

    /// Issue a signed request.
    ///
    /// Adds `appid`, `nonce` and `timestamp`, signs, then appends `sign`.
    /// GET sends the parameters as a query string, POST as a form body.
    pub async fn signed_request(
        &self,
        method: SignedMethod,
        endpoint: &str,
        params: Params,
        timeout: Duration,
    ) -> Result<Value> {
        let account = self
            .account
            .as_ref()
            .ok_or(TryminexError::MissingCredentials)?;
        let http_method = method.as_method();
        let params = sign_params(account, &http_method, endpoint, params, Utc::now());

        debug!(method = %http_method, endpoint, "signed request");
        let builder = self
            .http_client
            .request(http_method, self.url(endpoint)?)
            .timeout(timeout);
        let builder = match method {
            SignedMethod::Get => builder.query(&params),
            SignedMethod::Post => builder.form(&params),
        };
        self.send_json(builder, timeout).await
    }

    async fn send_json(&self, builder: RequestBuilder, timeout: Duration) -> Result<Value> {
        let response = builder
            .send()
            .await
            .map_err(|err| transport_error(err, timeout))?;
        read_json(response, timeout).await
    }
}

/// Add the common private fields and the signature to `params`
fn sign_params(
    account: &Account,
    method: &Method,
    endpoint: &str,
    mut params: Params,
    now: DateTime<Utc>,
) -> Params {
    params.insert("appid".to_string(), account.appid.as_str().into());
    params.insert("nonce".to_string(), now.timestamp_millis().into());
    params.insert("timestamp".to_string(), now.timestamp().into());
    let signature = account.signer.sign(method, endpoint, &params);
    params.insert(SIGN_PARAM.to_string(), signature.into());
    params
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> TryminexError {
    if err.is_timeout() {
        warn!(timeout_ms = timeout.as_millis() as u64, "request timed out");
        TryminexError::Timeout { timeout }
    } else {
        warn!(error = %err, "request failed");
        TryminexError::Http(err)
    }
}

async fn read_json(response: Response, timeout: Duration) -> Result<Value> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let body = response
            .text()
            .await
            .map_err(|err| transport_error(err, timeout))?;
        warn!(status = status.as_u16(), "request rejected");
        return Err(TryminexError::status_error(status, body));
    }
    if status != StatusCode::OK {
        debug!(status = status.as_u16(), "no result for non-200 status");
        return Ok(Value::Null);
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|err| transport_error(err, timeout))?;
    Ok(serde_json::from_slice(&bytes)?)
}
