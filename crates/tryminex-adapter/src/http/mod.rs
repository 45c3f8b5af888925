/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and JSON API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod batch;
pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod trade;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Result, TryminexError};
pub use signature::RequestSigner;

pub use client::{ClientConfig, Credentials, DEFAULT_BASE_URL, SignedMethod, TryminexClient};
pub use public::{DEFAULT_DEPTH_LIMIT, DEFAULT_KLINE_PERIOD};
