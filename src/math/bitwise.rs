//! Bitwise operators over the 64-bit pattern view of a value.
//!
//! Two signed operands give a signed result. Any other combination works on
//! the unsigned pattern, with floats reinterpreted bit for bit.

use crate::core::{positive_integral_cast, CalcError, Preference, Result, Value};

fn bitwise(lhs: Value, rhs: Value, operation: fn(u64, u64) -> u64) -> Value {
    match (lhs, rhs) {
        (Value::Signed(a), Value::Signed(b)) => Value::Signed(operation(a as u64, b as u64) as i64),
        _ => Value::Unsigned(operation(lhs.bit_pattern(), rhs.bit_pattern())),
    }
}

pub fn bit_and(lhs: Value, rhs: Value) -> Value {
    bitwise(lhs, rhs, |a, b| a & b)
}

pub fn bit_or(lhs: Value, rhs: Value) -> Value {
    bitwise(lhs, rhs, |a, b| a | b)
}

pub fn bit_xor(lhs: Value, rhs: Value) -> Value {
    bitwise(lhs, rhs, |a, b| a ^ b)
}

pub fn complement(value: Value) -> Value {
    match value {
        Value::Signed(v) => Value::Signed(!v),
        _ => Value::Unsigned(!value.bit_pattern()),
    }
}

/// Validates a shift amount; only `1..=63` is accepted.
fn shift_amount(amount: &Value) -> Result<u32> {
    let amount = positive_integral_cast(amount)?;
    if amount >= u64::from(u64::BITS) {
        return Err(CalcError::range("Shift amount too large"));
    }
    Ok(amount as u32)
}

/// Left shift computed exactly and narrowed per the shifted value's kind.
///
/// ```rust
/// use rpn_engine::core::Value;
/// use rpn_engine::math::shl;
///
/// assert_eq!(shl(Value::Signed(1), Value::Signed(1)).unwrap(), Value::Signed(2));
/// assert!(shl(Value::Signed(1), Value::Signed(64)).is_err());
/// ```
pub fn shl(lhs: Value, rhs: Value) -> Result<Value> {
    let amount = shift_amount(&rhs)?;
    Ok(match lhs {
        Value::Signed(v) => Value::narrow(i128::from(v) << amount, Preference::Signed),
        _ => Value::narrow(i128::from(lhs.bit_pattern()) << amount, Preference::Unsigned),
    })
}

/// Right shift; arithmetic for signed values, logical otherwise.
pub fn shr(lhs: Value, rhs: Value) -> Result<Value> {
    let amount = shift_amount(&rhs)?;
    Ok(match lhs {
        Value::Signed(v) => Value::Signed(v >> amount),
        _ => Value::Unsigned(lhs.bit_pattern() >> amount),
    })
}
