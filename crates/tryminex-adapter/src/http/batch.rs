/*
[INPUT]:  Display symbol and an authenticated client
[OUTPUT]: Best-effort cancellation report for every open order
[POS]:    HTTP layer - batch helper over list_orders + cancel_order
[UPDATE]: When the open order listing or cancel flow changes
*/

use tracing::{info, warn};

use crate::http::{Result, TryminexClient};
use crate::types::{CancelAllReport, order_numbers};

impl TryminexClient {
    /// Cancel every open order for `symbol`.
    ///
    /// Orders are cancelled one at a time. A failed cancel is recorded and the
    /// remaining orders are still attempted, so a partial failure leaves the
    /// orders listed in `failed` open. Only a failure to list orders is
    /// returned as `Err`.
    pub async fn cancel_all(&self, symbol: &str) -> Result<CancelAllReport> {
        let open_orders = self.list_orders(symbol).await?;
        let order_nos = order_numbers(&open_orders)?;

        if order_nos.is_empty() {
            info!(symbol, "no orders found");
            return Ok(CancelAllReport::NoOrdersFound);
        }

        let mut cancelled = Vec::new();
        let mut failed = Vec::new();
        for order_no in order_nos {
            match self.cancel_order(&order_no).await {
                Ok(response) => cancelled.push((order_no, response)),
                Err(err) => {
                    warn!(symbol, order_no = %order_no, error = %err, "cancel failed");
                    failed.push((order_no, err));
                }
            }
        }

        info!(
            symbol,
            cancelled = cancelled.len(),
            failed = failed.len(),
            "cancel_all finished"
        );
        Ok(CancelAllReport::Attempted { cancelled, failed })
    }
}
