/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Tryminex adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    DEFAULT_BASE_URL,
    DEFAULT_DEPTH_LIMIT,
    DEFAULT_KLINE_PERIOD,
    RequestSigner,
    Result,
    SignedMethod,
    TryminexClient,
    TryminexError,
};

// Re-export all types
pub use types::*;
