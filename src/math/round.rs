//! Rounding functions.
//!
//! These are only defined for floats. Integral values are already round, so
//! passing one is reported as a domain error for the caller to handle.

use crate::core::{CalcError, Result, Value};

fn float_only(value: Value, operation: fn(f64) -> f64) -> Result<Value> {
    match value {
        Value::Float(v) => Ok(Value::Float(operation(v))),
        Value::Signed(_) | Value::Unsigned(_) => Err(CalcError::domain("Not a floating-point")),
    }
}

/// Rounds half away from zero.
pub fn round(value: Value) -> Result<Value> {
    float_only(value, f64::round)
}

pub fn floor(value: Value) -> Result<Value> {
    float_only(value, f64::floor)
}

pub fn ceil(value: Value) -> Result<Value> {
    float_only(value, f64::ceil)
}

pub fn trunc(value: Value) -> Result<Value> {
    float_only(value, f64::trunc)
}
