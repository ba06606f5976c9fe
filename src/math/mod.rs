//! Operators over [`Value`](crate::core::Value).
//!
//! Every operator is a pure function of its operands. Fallible operators
//! return [`Result`](crate::core::Result); the rest cannot fail because the
//! float fallback always has room for the answer.
//!
//! [`BinaryOp`] and [`UnaryOp`] name the operators so callers can pick one
//! at runtime, e.g. from a key binding or a command word.

mod arithmetic;
mod bitwise;
mod logarithm;
mod round;

pub use arithmetic::{add, div, modulo, mul, negate, pow, pow_n, quotient, sub};
pub use bitwise::{bit_and, bit_or, bit_xor, complement, shl, shr};
pub use logarithm::{lg, ln, log};
pub use round::{ceil, floor, round, trunc};

use crate::core::{Result, Value};

/// An operator taking two stack values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Quotient,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Pow,
}

impl BinaryOp {
    /// Applies the operator; `lhs` is the deeper of the two stack values.
    ///
    /// ```rust
    /// use rpn_engine::core::Value;
    /// use rpn_engine::math::BinaryOp;
    ///
    /// let result = BinaryOp::Sub.apply(Value::Unsigned(1), Value::Unsigned(2)).unwrap();
    /// assert_eq!(result, Value::Signed(-1));
    /// ```
    pub fn apply(self, lhs: Value, rhs: Value) -> Result<Value> {
        match self {
            Self::Add => Ok(add(lhs, rhs)),
            Self::Sub => Ok(sub(lhs, rhs)),
            Self::Mul => Ok(mul(lhs, rhs)),
            Self::Div => div(lhs, rhs),
            Self::Mod => modulo(lhs, rhs),
            Self::Quotient => quotient(lhs, rhs),
            Self::BitAnd => Ok(bit_and(lhs, rhs)),
            Self::BitOr => Ok(bit_or(lhs, rhs)),
            Self::BitXor => Ok(bit_xor(lhs, rhs)),
            Self::Shl => shl(lhs, rhs),
            Self::Shr => shr(lhs, rhs),
            Self::Pow => Ok(pow(lhs, rhs)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Quotient => "quotient",
            Self::BitAnd => "bit_and",
            Self::BitOr => "bit_or",
            Self::BitXor => "bit_xor",
            Self::Shl => "shl",
            Self::Shr => "shr",
            Self::Pow => "pow",
        }
    }
}

/// An operator taking the top stack value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    Complement,
    Pow2,
    Pow3,
    Pow4,
    Pow5,
    Pow6,
    Pow7,
    Pow8,
    Pow9,
    Round,
    Floor,
    Ceil,
    Trunc,
    Lg,
    Ln,
    Log,
}

impl UnaryOp {
    pub fn apply(self, value: Value) -> Result<Value> {
        match self {
            Self::Negate => Ok(negate(value)),
            Self::Complement => Ok(complement(value)),
            Self::Pow2 => Ok(pow_n::<2>(value)),
            Self::Pow3 => Ok(pow_n::<3>(value)),
            Self::Pow4 => Ok(pow_n::<4>(value)),
            Self::Pow5 => Ok(pow_n::<5>(value)),
            Self::Pow6 => Ok(pow_n::<6>(value)),
            Self::Pow7 => Ok(pow_n::<7>(value)),
            Self::Pow8 => Ok(pow_n::<8>(value)),
            Self::Pow9 => Ok(pow_n::<9>(value)),
            Self::Round => round(value),
            Self::Floor => floor(value),
            Self::Ceil => ceil(value),
            Self::Trunc => trunc(value),
            Self::Lg => Ok(lg(value)),
            Self::Ln => Ok(ln(value)),
            Self::Log => Ok(log(value)),
        }
    }

    /// The fixed-power operator for `exponent`, if one exists.
    pub fn power(exponent: u32) -> Option<Self> {
        Some(match exponent {
            2 => Self::Pow2,
            3 => Self::Pow3,
            4 => Self::Pow4,
            5 => Self::Pow5,
            6 => Self::Pow6,
            7 => Self::Pow7,
            8 => Self::Pow8,
            9 => Self::Pow9,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Negate => "negate",
            Self::Complement => "complement",
            Self::Pow2 => "pow2",
            Self::Pow3 => "pow3",
            Self::Pow4 => "pow4",
            Self::Pow5 => "pow5",
            Self::Pow6 => "pow6",
            Self::Pow7 => "pow7",
            Self::Pow8 => "pow8",
            Self::Pow9 => "pow9",
            Self::Round => "round",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Trunc => "trunc",
            Self::Lg => "lg",
            Self::Ln => "ln",
            Self::Log => "log",
        }
    }
}
