//! Lexer output tokens.

use serde::{Deserialize, Serialize};

/// One whitespace-delimited input unit.
///
/// Numeric payloads have their grouping characters stripped and are ready
/// for conversion. Signed payloads omit the leading `i`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Integer literal, possibly with a `0b`, `0x` or `0` base prefix
    Unsigned(String),
    /// `i`-prefixed integer literal, e.g. `-42` for input `i-42`
    Signed(String),
    /// Literal containing a `.` or an exponent
    Float(String),
    /// Anything that is not a number, such as a command or constant name
    String(String),
    /// A malformed numeric literal
    Invalid,
}
