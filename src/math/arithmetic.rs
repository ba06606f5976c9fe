//! Arithmetic operators.
//!
//! Integral operands are combined exactly in an `i128` and narrowed back.
//! Two signed operands prefer a signed result; every other integral
//! combination prefers unsigned. A float operand makes the result a float.

use crate::core::{integral_cast, CalcError, Preference, Result, Value};

fn preference(lhs: &Value, rhs: &Value) -> Preference {
    match (lhs, rhs) {
        (Value::Signed(_), Value::Signed(_)) => Preference::Signed,
        _ => Preference::Unsigned,
    }
}

fn integral_pair(lhs: &Value, rhs: &Value) -> Option<(i128, i128)> {
    Some((lhs.widen()?, rhs.widen()?))
}

fn fits_64_bits(wide: i128) -> bool {
    wide >= i128::from(i64::MIN) && wide <= i128::from(u64::MAX)
}

/// Zero and NaN divisors are rejected by every division flavour.
fn validate_divisor(divisor: &Value) -> Result<()> {
    let rejected = match *divisor {
        Value::Signed(v) => v == 0,
        Value::Unsigned(v) => v == 0,
        Value::Float(v) => v == 0.0 || v.is_nan(),
    };
    if rejected {
        return Err(CalcError::domain("Division by zero"));
    }
    Ok(())
}

pub fn add(lhs: Value, rhs: Value) -> Value {
    match integral_pair(&lhs, &rhs) {
        Some((a, b)) => Value::narrow(a + b, preference(&lhs, &rhs)),
        None => Value::Float(lhs.to_f64() + rhs.to_f64()),
    }
}

/// Subtraction; an unsigned difference below zero becomes signed.
pub fn sub(lhs: Value, rhs: Value) -> Value {
    match integral_pair(&lhs, &rhs) {
        Some((a, b)) => Value::narrow(a - b, preference(&lhs, &rhs)),
        None => Value::Float(lhs.to_f64() - rhs.to_f64()),
    }
}

pub fn mul(lhs: Value, rhs: Value) -> Value {
    match integral_pair(&lhs, &rhs) {
        // Only u64::MAX-sized factors can leave the i128 range.
        Some((a, b)) => match a.checked_mul(b) {
            Some(product) => Value::narrow(product, preference(&lhs, &rhs)),
            None => Value::Float(a as f64 * b as f64),
        },
        None => Value::Float(lhs.to_f64() * rhs.to_f64()),
    }
}

/// True division, always a float.
pub fn div(lhs: Value, rhs: Value) -> Result<Value> {
    validate_divisor(&rhs)?;
    Ok(Value::Float(lhs.to_f64() / rhs.to_f64()))
}

/// Remainder whose sign follows the dividend.
pub fn modulo(lhs: Value, rhs: Value) -> Result<Value> {
    validate_divisor(&rhs)?;
    Ok(match integral_pair(&lhs, &rhs) {
        Some((a, b)) => Value::narrow(a % b, preference(&lhs, &rhs)),
        None => Value::Float(lhs.to_f64() % rhs.to_f64()),
    })
}

/// Integer division truncating toward zero.
///
/// The result is integral even for float operands; it is stored as
/// unsigned when non-negative and signed otherwise.
pub fn quotient(lhs: Value, rhs: Value) -> Result<Value> {
    validate_divisor(&rhs)?;
    if let Some((a, b)) = integral_pair(&lhs, &rhs) {
        return Ok(Value::narrow(a / b, preference(&lhs, &rhs)));
    }

    let dividend = lhs.to_f64();
    if dividend.is_nan() {
        return Err(CalcError::domain("NaN dividend"));
    }
    if dividend.is_infinite() {
        return Err(CalcError::range("Infinite dividend"));
    }
    integral_cast(&Value::Float((dividend / rhs.to_f64()).trunc()))
}

/// Arithmetic negation, preferring an unsigned result.
pub fn negate(value: Value) -> Value {
    match value.widen() {
        Some(wide) => Value::narrow(-wide, Preference::Unsigned),
        None => Value::Float(-value.to_f64()),
    }
}

/// Raises `base` to the fixed power `N`, where `N` is in `2..=9`.
///
/// Integral bases are multiplied exactly; once an intermediate leaves the
/// 64-bit range the result is computed as a float instead.
///
/// ```rust
/// use rpn_engine::core::Value;
/// use rpn_engine::math::pow_n;
///
/// assert_eq!(pow_n::<3>(Value::Signed(-2)), Value::Signed(-8));
/// assert_eq!(pow_n::<2>(Value::Unsigned(1 << 32)), Value::Float(2f64.powi(64)));
/// ```
pub fn pow_n<const N: u32>(base: Value) -> Value {
    debug_assert!((2..=9).contains(&N));
    let Some(wide) = base.widen() else {
        return Value::Float(base.to_f64().powi(N as i32));
    };

    let mut result = wide;
    for _ in 1..N {
        match result.checked_mul(wide) {
            Some(next) if fits_64_bits(next) => result = next,
            _ => return Value::Float((wide as f64).powi(N as i32)),
        }
    }
    let preference = match base {
        Value::Signed(_) => Preference::Signed,
        _ => Preference::Unsigned,
    };
    Value::narrow(result, preference)
}

/// General power, always a float.
pub fn pow(base: Value, exponent: Value) -> Value {
    Value::Float(base.to_f64().powf(exponent.to_f64()))
}
