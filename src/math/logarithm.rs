//! Logarithms. Any kind is converted to a float first.

use crate::core::Value;

/// Binary logarithm.
pub fn lg(value: Value) -> Value {
    Value::Float(value.to_f64().log2())
}

/// Natural logarithm.
pub fn ln(value: Value) -> Value {
    Value::Float(value.to_f64().ln())
}

/// Decimal logarithm.
pub fn log(value: Value) -> Value {
    Value::Float(value.to_f64().log10())
}
