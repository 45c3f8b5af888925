/*
[INPUT]:  Display symbols and query parameters
[OUTPUT]: Market data JSON (symbols, tickers, depth, klines, server time)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing query parameters
*/

use reqwest::Method;
use serde_json::Value;

use crate::http::{Result, TryminexClient};
use crate::types::{Params, to_wire_symbol};

/// Depth levels requested when no limit is given
pub const DEFAULT_DEPTH_LIMIT: u32 = 50;
/// Kline period requested when none is given
pub const DEFAULT_KLINE_PERIOD: u32 = 1;

impl TryminexClient {
    /// List all markets
    ///
    /// GET /api/v1/symbols
    pub async fn load_markets(&self) -> Result<Value> {
        self.public_request(Method::GET, "/api/v1/symbols", &Params::new())
            .await
    }

    /// Tickers of all markets
    ///
    /// GET /api/v1/tickers
    pub async fn fetch_markets_tickers(&self) -> Result<Value> {
        self.public_request(Method::GET, "/api/v1/tickers", &Params::new())
            .await
    }

    /// Ticker of one market
    ///
    /// GET /api/v1/ticker/{symbol}
    pub async fn fetch_tickers(&self, symbol: &str) -> Result<Value> {
        let endpoint = format!("/api/v1/ticker/{}", to_wire_symbol(symbol)?);
        self.public_request(Method::GET, &endpoint, &Params::new())
            .await
    }

    /// Order book of one market
    ///
    /// GET /api/v1/depth?symbol={symbol}&limit={limit}
    pub async fn fetch_depths(&self, symbol: &str, limit: Option<u32>) -> Result<Value> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), to_wire_symbol(symbol)?.into());
        params.insert(
            "limit".to_string(),
            limit.unwrap_or(DEFAULT_DEPTH_LIMIT).into(),
        );
        self.public_request(Method::GET, "/api/v1/depth", &params)
            .await
    }

    /// Candlesticks of one market
    ///
    /// GET /api/v1/kline?symbol={symbol}&period={period}
    pub async fn fetch_ohlcv(&self, symbol: &str, period: Option<u32>) -> Result<Value> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), to_wire_symbol(symbol)?.into());
        params.insert(
            "period".to_string(),
            period.unwrap_or(DEFAULT_KLINE_PERIOD).into(),
        );
        self.public_request(Method::GET, "/api/v1/kline", &params)
            .await
    }

    /// Same as [`TryminexClient::fetch_ohlcv`] with an explicit period
    pub async fn fetch_kline(&self, symbol: &str, period: u32) -> Result<Value> {
        self.fetch_ohlcv(symbol, Some(period)).await
    }

    /// Server time in seconds since the Unix epoch
    ///
    /// GET /api/v1/timestamp
    pub async fn fetch_timestamp(&self) -> Result<Value> {
        self.public_request(Method::GET, "/api/v1/timestamp", &Params::new())
            .await
    }
}
