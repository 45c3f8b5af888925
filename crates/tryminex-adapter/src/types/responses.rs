/*
[INPUT]:  Untyped JSON responses from the exchange
[OUTPUT]: Projected order identifiers and batch cancel outcomes
[POS]:    Data layer - response projections
[UPDATE]: When the order list shape or batch result changes
*/

use serde_json::Value;

use crate::http::{Result, TryminexError};

/// Field holding the order records in list responses
pub const ORDER_LIST_FIELD: &str = "data";
/// Field holding the order identifier in each record
pub const ORDER_NO_FIELD: &str = "orderNo";

/// Extract the order identifiers from a `processing-orders` response.
///
/// Records without a usable `orderNo` are skipped.
pub fn order_numbers(response: &Value) -> Result<Vec<String>> {
    let records = response
        .get(ORDER_LIST_FIELD)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            TryminexError::InvalidResponse(format!(
                "missing `{ORDER_LIST_FIELD}` order list"
            ))
        })?;

    Ok(records
        .iter()
        .filter_map(|record| match record.get(ORDER_NO_FIELD)? {
            Value::String(order_no) if !order_no.is_empty() => Some(order_no.clone()),
            Value::Number(order_no) => Some(order_no.to_string()),
            _ => None,
        })
        .collect())
}

/// Outcome of cancelling every open order for a symbol.
///
/// Cancellation is best effort: entries in `failed` may still be open.
#[derive(Debug)]
pub enum CancelAllReport {
    /// The open order list was empty, nothing was cancelled
    NoOrdersFound,
    /// One cancel call was made per listed order
    Attempted {
        cancelled: Vec<(String, Value)>,
        failed: Vec<(String, TryminexError)>,
    },
}

impl CancelAllReport {
    /// Number of cancel calls that were issued
    pub fn attempts(&self) -> usize {
        match self {
            CancelAllReport::NoOrdersFound => 0,
            CancelAllReport::Attempted { cancelled, failed } => cancelled.len() + failed.len(),
        }
    }

    /// True when every attempted cancel succeeded
    pub fn is_complete(&self) -> bool {
        match self {
            CancelAllReport::NoOrdersFound => true,
            CancelAllReport::Attempted { failed, .. } => failed.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_numbers_accepts_strings_and_numbers() {
        let response = json!({
            "code": 0,
            "data": [
                {"orderNo": "1001", "price": "0.1"},
                {"orderNo": 1002},
                {"price": "0.3"},
                {"orderNo": ""}
            ]
        });

        assert_eq!(order_numbers(&response).unwrap(), vec!["1001", "1002"]);
    }

    #[test]
    fn test_order_numbers_empty_list() {
        let response = json!({"data": []});
        assert!(order_numbers(&response).unwrap().is_empty());
    }

    #[test]
    fn test_order_numbers_missing_list() {
        let err = order_numbers(&json!({"code": 1})).unwrap_err();
        assert!(matches!(err, TryminexError::InvalidResponse(_)));
        assert!(order_numbers(&Value::Null).is_err());
    }

    #[test]
    fn test_report_counts() {
        let report = CancelAllReport::Attempted {
            cancelled: vec![("1".to_string(), json!({"code": 0}))],
            failed: vec![("2".to_string(), TryminexError::MissingCredentials)],
        };
        assert_eq!(report.attempts(), 2);
        assert!(!report.is_complete());
        assert_eq!(CancelAllReport::NoOrdersFound.attempts(), 0);
        assert!(CancelAllReport::NoOrdersFound.is_complete());
    }
}
