/*
[INPUT]:  Order placement/cancellation arguments and API credentials
[OUTPUT]: Order creation/cancellation JSON responses
[POS]:    HTTP layer - signed trading endpoints
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::user::order_params;
use crate::http::{Result, TryminexClient};
use crate::types::{Params, TradeType, to_wire_symbol};

impl TryminexClient {
    /// Place a limit order
    ///
    /// POST /api/v1/order/create
    /// Parameters travel in the form body, not the query string.
    pub async fn create_order(
        &self,
        symbol: &str,
        trade_type: TradeType,
        price: Decimal,
        amount: Decimal,
    ) -> Result<Value> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), to_wire_symbol(symbol)?.into());
        params.insert("tradeType".to_string(), trade_type.as_str().into());
        params.insert("price".to_string(), price.into());
        params.insert("amount".to_string(), amount.into());
        self.signed_post("/api/v1/order/create", params).await
    }

    /// Cancel an order
    ///
    /// GET /api/v1/order/cancle
    /// The exchange exposes cancellation as a signed GET on this path.
    pub async fn cancel_order(&self, order_no: &str) -> Result<Value> {
        self.signed_get("/api/v1/order/cancle", order_params(order_no))
            .await
    }
}
