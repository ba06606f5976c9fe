//! Tagged numeric storage.
//!
//! A [`Value`] holds exactly one of three representations. Arithmetic is
//! done in a wider intermediate and then narrowed back into one of them,
//! so this module also owns the coercions between the kinds.

use super::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calculator value.
///
/// Values are plain `Copy` data; every operation produces a new value.
///
/// # Example
///
/// ```rust
/// use rpn_engine::core::{Kind, Value};
///
/// let value = Value::from(42u64);
/// assert_eq!(value.kind(), Kind::Unsigned);
/// assert_eq!(value.to_string(), "42");
/// assert_eq!(Value::from(-1i64).bit_pattern(), u64::MAX);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Signed 64-bit integer
    Signed(i64),
    /// Unsigned 64-bit integer
    Unsigned(u64),
    /// IEEE-754 double
    Float(f64),
}

/// The storage kind of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Signed,
    Unsigned,
    Float,
}

/// Which integer kind wins when a narrowed result fits both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preference {
    Signed,
    Unsigned,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Signed(_) => Kind::Signed,
            Self::Unsigned(_) => Kind::Unsigned,
            Self::Float(_) => Kind::Float,
        }
    }

    /// Stores an exact wide result in the tightest fitting kind.
    ///
    /// Results outside `[i64::MIN, u64::MAX]` become `Float`. Inside that
    /// range the preference decides between the two integer kinds when both
    /// can hold the value.
    ///
    /// ```rust
    /// use rpn_engine::core::{Preference, Value};
    ///
    /// assert_eq!(Value::narrow(5, Preference::Unsigned), Value::Unsigned(5));
    /// assert_eq!(Value::narrow(5, Preference::Signed), Value::Signed(5));
    /// assert_eq!(Value::narrow(-5, Preference::Unsigned), Value::Signed(-5));
    /// assert_eq!(
    ///     Value::narrow(i64::MAX as i128 + 1, Preference::Signed),
    ///     Value::Unsigned(1 << 63)
    /// );
    /// ```
    pub fn narrow(wide: i128, preference: Preference) -> Self {
        if wide < i128::from(i64::MIN) || wide > i128::from(u64::MAX) {
            return Self::Float(wide as f64);
        }

        match preference {
            Preference::Unsigned if wide < 0 => Self::Signed(wide as i64),
            Preference::Unsigned => Self::Unsigned(wide as u64),
            Preference::Signed if wide > i128::from(i64::MAX) => Self::Unsigned(wide as u64),
            Preference::Signed => Self::Signed(wide as i64),
        }
    }

    /// The exact integer held, or `None` for floats.
    pub fn widen(&self) -> Option<i128> {
        match *self {
            Self::Signed(v) => Some(i128::from(v)),
            Self::Unsigned(v) => Some(i128::from(v)),
            Self::Float(_) => None,
        }
    }

    /// Numeric conversion to a double; may lose precision for large integers.
    pub fn to_f64(&self) -> f64 {
        match *self {
            Self::Signed(v) => v as f64,
            Self::Unsigned(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// The 64-bit pattern view used by the bitwise operators.
    ///
    /// Signed values use their two's complement pattern and floats are
    /// reinterpreted, not converted.
    pub fn bit_pattern(&self) -> u64 {
        match *self {
            Self::Signed(v) => v as u64,
            Self::Unsigned(v) => v,
            Self::Float(v) => v.to_bits(),
        }
    }

    /// Suffix shown after a value in debug display mode.
    pub fn debug_suffix(&self) -> &'static str {
        match self {
            Self::Signed(_) => "|i",
            Self::Unsigned(_) => "|u",
            Self::Float(_) => "|d",
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Signed(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_finite() && *v != 0.0 && !(1e-5..1e16).contains(&v.abs()) => {
                write!(f, "{v:e}")
            }
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Converts a strictly positive value to an unsigned integer.
///
/// Used for operands that count something, such as shift amounts.
pub fn positive_integral_cast(value: &Value) -> Result<u64> {
    match *value {
        Value::Signed(v) if v <= 0 => Err(CalcError::range("Not a positive value")),
        Value::Signed(v) => Ok(v as u64),
        Value::Unsigned(0) => Err(CalcError::range("Not a positive value")),
        Value::Unsigned(v) => Ok(v),
        Value::Float(v) if v.is_nan() => Err(CalcError::range("Not an integral")),
        Value::Float(v) => {
            if v <= 0.0 {
                return Err(CalcError::range("Not a positive value"));
            }
            if v >= U64_LIMIT {
                return Err(CalcError::range("Value too large"));
            }
            if v.fract() != 0.0 {
                return Err(CalcError::range("Not an integral"));
            }
            Ok(v as u64)
        }
    }
}

/// Converts a strictly negative value to a signed integer.
pub fn negative_integral_cast(value: &Value) -> Result<i64> {
    match *value {
        Value::Signed(v) if v < 0 => Ok(v),
        Value::Signed(_) | Value::Unsigned(_) => Err(CalcError::range("Not a negative value")),
        Value::Float(v) if v.is_nan() => Err(CalcError::range("Not an integral")),
        Value::Float(v) => {
            if v >= 0.0 {
                return Err(CalcError::range("Not a negative value"));
            }
            if v < i64::MIN as f64 {
                return Err(CalcError::range("Value too small"));
            }
            if v.fract() != 0.0 {
                return Err(CalcError::range("Not an integral"));
            }
            Ok(v as i64)
        }
    }
}

/// Converts any integral value to its natural integer kind.
///
/// Zero and positive values become `Unsigned`, negative values `Signed`.
///
/// ```rust
/// use rpn_engine::core::{integral_cast, Value};
///
/// assert_eq!(integral_cast(&Value::Float(-0.0)).unwrap(), Value::Unsigned(0));
/// assert_eq!(integral_cast(&Value::Float(-3.0)).unwrap(), Value::Signed(-3));
/// assert!(integral_cast(&Value::Float(0.5)).is_err());
/// ```
pub fn integral_cast(value: &Value) -> Result<Value> {
    match *value {
        Value::Signed(v) if v >= 0 => Ok(Value::Unsigned(v as u64)),
        Value::Signed(_) | Value::Unsigned(_) => Ok(*value),
        Value::Float(v) if !v.is_finite() => Err(CalcError::range("Not finite")),
        Value::Float(v) if v == 0.0 => Ok(Value::Unsigned(0)),
        Value::Float(v) if v > 0.0 => positive_integral_cast(value).map(Value::Unsigned),
        Value::Float(_) => negative_integral_cast(value).map(Value::Signed),
    }
}

/// `u64::MAX + 1`; the cast rounds up to the next power of two.
const U64_LIMIT: f64 = u64::MAX as f64;
