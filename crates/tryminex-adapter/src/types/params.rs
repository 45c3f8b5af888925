/*
[INPUT]:  Per-call request arguments (strings, integers)
[OUTPUT]: Ordered parameter map used for signing, query strings and form bodies
[POS]:    Data layer - request parameter representation
[UPDATE]: When endpoints need new scalar parameter kinds
*/

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Request parameters keyed by name.
///
/// A `BTreeMap` iterates in byte-wise key order, which is the order the
/// signing string requires.
pub type Params = BTreeMap<String, ParamValue>;

/// Scalar value of a request parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(value) => f.write_str(value),
            ParamValue::Int(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Str(value) => serializer.serialize_str(value),
            ParamValue::Int(value) => serializer.serialize_i64(*value),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<rust_decimal::Decimal> for ParamValue {
    fn from(value: rust_decimal::Decimal) -> Self {
        ParamValue::Str(value.to_string())
    }
}
