//! Canonical text for evaluation results.
//!
//! [`stringify`] is the comparison oracle used by tests and for display. Its
//! number rendering is fixed to six decimals, unlike [`GeneralNumber`] which
//! is what string templates and container elements use.

use std::fmt;

use crate::value::Value;

pub fn stringify(value: &Value<'_>) -> String {
    match value {
        Value::None => "result:none".to_string(),
        Value::Boolean(b) => format!("result:boolean:{b}"),
        Value::Number(n) => format!("result:number:{}", FixedNumber(*n)),
        Value::String(s) => format!("result:string:\"{s}\""),
        Value::Array(_) => format!("result:array:{value}"),
        Value::Object(_) => format!("result:object:{value}"),
    }
}

/// Shortest text that reads back to the same `f64`, without trailing zeros.
#[derive(Debug, Clone, Copy)]
pub struct GeneralNumber(pub f64);

impl fmt::Display for GeneralNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return write!(f, "nan");
        }
        write!(f, "{}", self.0)
    }
}

/// Exactly six digits after the decimal point.
#[derive(Debug, Clone, Copy)]
pub struct FixedNumber(pub f64);

impl fmt::Display for FixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return write!(f, "nan");
        }
        write!(f, "{:.6}", self.0)
    }
}
