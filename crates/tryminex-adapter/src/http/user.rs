/*
[INPUT]:  Account/order query parameters and API credentials
[OUTPUT]: User account data JSON (profile, balances, orders, trades)
[POS]:    HTTP layer - signed read endpoints
[UPDATE]: When adding new user endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::{Result, TryminexClient};
use crate::types::{Params, to_wire_symbol};

fn symbol_params(symbol: &str) -> Result<Params> {
    let mut params = Params::new();
    params.insert("symbol".to_string(), to_wire_symbol(symbol)?.into());
    Ok(params)
}

pub(crate) fn order_params(order_no: &str) -> Params {
    let mut params = Params::new();
    params.insert("orderNo".to_string(), order_no.into());
    params
}

impl TryminexClient {
    /// Profile and account info
    ///
    /// GET /api/v1/users/me
    pub async fn user_info(&self) -> Result<Value> {
        self.signed_get("/api/v1/users/me", Params::new()).await
    }

    /// Balances of all currencies
    ///
    /// GET /api/v1/account/all
    pub async fn accounts_info(&self) -> Result<Value> {
        self.signed_get("/api/v1/account/all", Params::new()).await
    }

    /// Balance of one currency
    ///
    /// GET /api/v1/account?currency={currency}
    pub async fn currency_account(&self, currency: &str) -> Result<Value> {
        let mut params = Params::new();
        params.insert("currency".to_string(), currency.into());
        self.signed_get("/api/v1/account", params).await
    }

    /// Open orders of one market
    ///
    /// GET /api/v1/processing-orders?symbol={symbol}
    pub async fn list_orders(&self, symbol: &str) -> Result<Value> {
        self.signed_get("/api/v1/processing-orders", symbol_params(symbol)?)
            .await
    }

    /// One order by number
    ///
    /// GET /api/v1/order?orderNo={order_no}
    pub async fn list_order(&self, order_no: &str) -> Result<Value> {
        self.signed_get("/api/v1/order", order_params(order_no)).await
    }

    /// Executed trades of one market, newest first
    ///
    /// GET /api/v1/history-orders?symbol={symbol}
    pub async fn fetch_mytrades(&self, symbol: &str) -> Result<Value> {
        self.signed_get("/api/v1/history-orders", symbol_params(symbol)?)
            .await
    }
}
