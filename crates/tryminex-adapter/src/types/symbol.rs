/*
[INPUT]:  Display-form trading pair (e.g. "BTC/USDT")
[OUTPUT]: Wire-form trading pair (e.g. "BTC_USDT")
[POS]:    Data layer - symbol normalization
[UPDATE]: When the exchange changes its pair notation
*/

use crate::http::{Result, TryminexError};

/// Separator used by callers ("BASE/QUOTE")
pub const DISPLAY_SEPARATOR: char = '/';
/// Separator expected by the exchange ("BASE_QUOTE")
pub const WIRE_SEPARATOR: char = '_';

/// Convert a display symbol into the exchange's wire format.
///
/// The input must contain exactly one `/` with a non-empty ASCII
/// alphanumeric asset on each side. The wire symbol is used as a URL path
/// segment, so nothing else is allowed through.
pub fn to_wire_symbol(display: &str) -> Result<String> {
    let mut parts = display.split(DISPLAY_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(base), Some(quote), None) if is_asset(base) && is_asset(quote) => {
            Ok(format!("{base}{WIRE_SEPARATOR}{quote}"))
        }
        _ => Err(TryminexError::InvalidSymbol(display.to_string())),
    }
}

fn is_asset(asset: &str) -> bool {
    !asset.is_empty() && asset.bytes().all(|b| b.is_ascii_alphanumeric())
}
