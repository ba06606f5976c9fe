//! Named constants and commands that can be typed on the input line.
//!
//! Both tables are sorted by name so a lookup is a binary search.

use crate::core::Value;
use crate::math::{BinaryOp, UnaryOp};
use std::f64::consts;

/// What a command word does when entered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Unary(UnaryOp),
    Binary(BinaryOp),
    DebugToggle,
}

/// Resolution of a typed word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entry {
    Constant(Value),
    Command(Command),
}

const CONSTANTS: &[(&str, Value)] = &[
    ("double_max", Value::Float(f64::MAX)),
    ("double_min", Value::Float(f64::MIN_POSITIVE)),
    ("e", Value::Float(consts::E)),
    ("float_max", Value::Float(f32::MAX as f64)),
    ("float_min", Value::Float(f32::MIN_POSITIVE as f64)),
    ("int16_max", Value::Signed(i16::MAX as i64)),
    ("int16_min", Value::Signed(i16::MIN as i64)),
    ("int32_max", Value::Signed(i32::MAX as i64)),
    ("int32_min", Value::Signed(i32::MIN as i64)),
    ("int64_max", Value::Signed(i64::MAX)),
    ("int64_min", Value::Signed(i64::MIN)),
    ("int8_max", Value::Signed(i8::MAX as i64)),
    ("int8_min", Value::Signed(i8::MIN as i64)),
    ("pi", Value::Float(consts::PI)),
    ("uint16_max", Value::Unsigned(u16::MAX as u64)),
    ("uint32_max", Value::Unsigned(u32::MAX as u64)),
    ("uint64_max", Value::Unsigned(u64::MAX)),
    ("uint8_max", Value::Unsigned(u8::MAX as u64)),
];

const COMMANDS: &[(&str, Command)] = &[
    ("ceil", Command::Unary(UnaryOp::Ceil)),
    ("debug", Command::DebugToggle),
    ("floor", Command::Unary(UnaryOp::Floor)),
    ("lg", Command::Unary(UnaryOp::Lg)),
    ("ln", Command::Unary(UnaryOp::Ln)),
    ("log", Command::Unary(UnaryOp::Log)),
    ("pow", Command::Binary(BinaryOp::Pow)),
    ("round", Command::Unary(UnaryOp::Round)),
    ("trunc", Command::Unary(UnaryOp::Trunc)),
];

fn find<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table
        .binary_search_by(|(key, _)| (*key).cmp(name))
        .ok()
        .map(|index| table[index].1)
}

pub fn constant(name: &str) -> Option<Value> {
    find(CONSTANTS, name)
}

pub fn command(name: &str) -> Option<Command> {
    find(COMMANDS, name)
}

/// Resolves `name`, constants first.
///
/// ```rust
/// use rpn_engine::core::Value;
/// use rpn_engine::session::dictionary::{lookup, Entry};
///
/// assert_eq!(lookup("uint8_max"), Some(Entry::Constant(Value::Unsigned(255))));
/// assert!(lookup("nope").is_none());
/// ```
pub fn lookup(name: &str) -> Option<Entry> {
    constant(name)
        .map(Entry::Constant)
        .or_else(|| command(name).map(Entry::Command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(CONSTANTS.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert!(COMMANDS.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn every_entry_is_found() {
        for (name, value) in CONSTANTS {
            assert_eq!(constant(name), Some(*value), "{name}");
        }
        for (name, command) in COMMANDS {
            assert_eq!(lookup(name), Some(Entry::Command(*command)), "{name}");
        }
    }

    #[test]
    fn integral_limits_keep_their_signedness() {
        assert_eq!(constant("int8_min"), Some(Value::Signed(-128)));
        assert_eq!(constant("int64_max"), Some(Value::Signed(i64::MAX)));
        assert_eq!(constant("uint64_max"), Some(Value::Unsigned(u64::MAX)));
        assert_eq!(constant("float_min"), Some(Value::Float(1.175_494_350_822_287_5e-38)));
    }

    #[test]
    fn unknown_names() {
        assert!(lookup("").is_none());
        assert!(lookup("PI").is_none());
        assert!(lookup("int128_max").is_none());
        assert_eq!(command("pow"), Some(Command::Binary(BinaryOp::Pow)));
        assert!(command("pi").is_none());
    }
}
