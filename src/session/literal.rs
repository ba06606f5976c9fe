//! Conversion of numeric tokens into values.

use crate::core::{CalcError, Result, Value};
use crate::lexer::Token;
use std::num::{IntErrorKind, ParseIntError};

const INVALID: &str = "Invalid numeric value";

/// Converts a numeric token into the value it denotes.
///
/// String tokens are not literals and are rejected like invalid ones; the
/// caller resolves them through the dictionary first.
///
/// ```rust
/// use rpn_engine::core::Value;
/// use rpn_engine::lexer::Token;
/// use rpn_engine::session::literal;
///
/// assert_eq!(literal::parse(&Token::Unsigned("0x1f".into())).unwrap(), Value::Unsigned(31));
/// assert_eq!(literal::parse(&Token::Signed("-7".into())).unwrap(), Value::Signed(-7));
/// assert!(literal::parse(&Token::Invalid).is_err());
/// ```
pub fn parse(token: &Token) -> Result<Value> {
    match token {
        Token::Unsigned(text) => parse_unsigned(text).map(Value::Unsigned),
        Token::Signed(text) => text.parse::<i64>().map(Value::Signed).map_err(int_error),
        Token::Float(text) => parse_float(text).map(Value::Float),
        Token::String(_) | Token::Invalid => Err(CalcError::domain(INVALID)),
    }
}

fn parse_unsigned(text: &str) -> Result<u64> {
    let (digits, radix) = if let Some(rest) = text.strip_prefix("0b") {
        (rest, 2)
    } else if let Some(rest) = text.strip_prefix("0x") {
        (rest, 16)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };
    u64::from_str_radix(digits, radix).map_err(int_error)
}

fn parse_float(text: &str) -> Result<f64> {
    let value = text
        .parse::<f64>()
        .map_err(|_| CalcError::domain(INVALID))?;
    if !value.is_finite() {
        return Err(CalcError::range("Not finite"));
    }
    Ok(value)
}

fn int_error(error: ParseIntError) -> CalcError {
    match error.kind() {
        IntErrorKind::PosOverflow => CalcError::range("Value too large"),
        IntErrorKind::NegOverflow => CalcError::range("Value too small"),
        _ => CalcError::domain(INVALID),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::lexer::lex;

    fn parse_str(input: &str) -> Result<Value> {
        let tokens = lex(input);
        assert_eq!(tokens.len(), 1, "{input:?} should lex to one token");
        parse(&tokens[0])
    }

    #[test]
    fn unsigned_bases() {
        assert_eq!(parse_str("0").unwrap(), Value::Unsigned(0));
        assert_eq!(parse_str("1_000").unwrap(), Value::Unsigned(1000));
        assert_eq!(parse_str("0b1010").unwrap(), Value::Unsigned(10));
        assert_eq!(parse_str("0777").unwrap(), Value::Unsigned(0o777));
        assert_eq!(parse_str("007").unwrap(), Value::Unsigned(7));
        assert_eq!(parse_str("00").unwrap(), Value::Unsigned(0));
        assert_eq!(parse_str("0xfF").unwrap(), Value::Unsigned(255));
        assert_eq!(
            parse_str("18446744073709551615").unwrap(),
            Value::Unsigned(u64::MAX)
        );
    }

    #[test]
    fn unsigned_overflow_is_range_error() {
        let error = parse_str("18446744073709551616").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Range);
        assert_eq!(error.message(), "Value too large");
        assert_eq!(
            parse_str("0x1_0000_0000_0000_0000").unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn signed_literals() {
        assert_eq!(parse_str("i42").unwrap(), Value::Signed(42));
        assert_eq!(parse_str("i-42").unwrap(), Value::Signed(-42));
        assert_eq!(
            parse_str("i-9223372036854775808").unwrap(),
            Value::Signed(i64::MIN)
        );
        assert_eq!(
            parse_str("i9223372036854775808").unwrap_err().message(),
            "Value too large"
        );
        assert_eq!(
            parse_str("i-9223372036854775809").unwrap_err().message(),
            "Value too small"
        );
    }

    #[test]
    fn float_literals() {
        assert_eq!(parse_str("1.").unwrap(), Value::Float(1.0));
        assert_eq!(parse_str(".5").unwrap(), Value::Float(0.5));
        assert_eq!(parse_str("1.e1").unwrap(), Value::Float(10.0));
        assert_eq!(parse_str("25e-1").unwrap(), Value::Float(2.5));

        let error = parse_str("1e400").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Range);
        assert_eq!(error.message(), "Not finite");
    }

    #[test]
    fn invalid_tokens_are_domain_errors() {
        for input in ["0b", "0x", ".", "09", "i-"] {
            let error = parse_str(input).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::Domain, "{input}");
            assert_eq!(error.message(), "Invalid numeric value");
        }
        assert!(parse(&Token::String("pi".into())).is_err());
    }
}
