//! The calculator session: model, undo history and the operations a user
//! triggers.
//!
//! Each operation runs inside a [`Transaction`]. Pending input is lexed and
//! pushed first, then the operation itself is applied. On success the
//! transaction is committed into the undo history and the diagnostics are
//! cleared. On failure the transaction reverts every change, the error
//! message is stored in the diagnostics and the error is returned.
//!
//! # Example
//!
//! ```rust
//! use rpn_engine::math::BinaryOp;
//! use rpn_engine::session::Session;
//!
//! let mut session = Session::new();
//! session.append("2 3");
//! session.binary(BinaryOp::Add).unwrap();
//! assert_eq!(session.stack_strings(), ["5"]);
//!
//! assert!(session.binary(BinaryOp::Add).is_err());
//! assert_eq!(session.diagnostics(), "The stack doesn't contain two elements");
//!
//! session.undo().unwrap();
//! assert_eq!(session.stack_strings(), Vec::<String>::new());
//! assert_eq!(session.input(), "2 3");
//! ```

pub mod dictionary;
pub mod literal;
mod model;

pub use model::Model;

use crate::core::{CalcError, Result, Stack};
use crate::history::{HistoryConfig, Transaction, UndoHistory};
use crate::lexer::Token;
use crate::math::{BinaryOp, UnaryOp};
use dictionary::{Command, Entry};
use tracing::debug;

/// Settings for a [`Session`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub history: HistoryConfig,
}

impl SessionConfig {
    #[must_use]
    pub fn with_history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    model: Model,
    history: UndoHistory,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            model: Model::new(),
            history: UndoHistory::with_config(config.history),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn stack(&self) -> &Stack {
        self.model.stack()
    }

    /// Rendered stack values, oldest first.
    pub fn stack_strings(&mut self) -> Vec<String> {
        self.model.stack_mut().strings().to_vec()
    }

    pub fn input(&self) -> &str {
        self.model.input()
    }

    pub fn diagnostics(&self) -> &str {
        self.model.diagnostics()
    }

    /// Appends text to the input line. Diagnostics are left alone.
    pub fn append(&mut self, data: &str) {
        self.model.input_append(data);
    }

    /// Pushes the pending input, or duplicates the top when there is none.
    pub fn enter(&mut self) -> Result<()> {
        self.run("enter", |transaction| {
            if transaction.model().input().is_empty() {
                transaction.duplicate()
            } else {
                apply_input(transaction)
            }
        })
    }

    /// Removes the last input character, or drops the top value when the
    /// input is empty. Editing the input is not recorded in the history.
    pub fn backspace(&mut self) -> Result<()> {
        if self.model.input_pop_back() {
            return Ok(());
        }
        self.run("backspace", |transaction| transaction.drop())
    }

    pub fn binary(&mut self, operation: BinaryOp) -> Result<()> {
        self.run(operation.name(), |transaction| {
            apply_input(transaction)?;
            apply_binary(transaction, operation)
        })
    }

    pub fn unary(&mut self, operation: UnaryOp) -> Result<()> {
        self.run(operation.name(), |transaction| {
            apply_input(transaction)?;
            apply_unary(transaction, operation)
        })
    }

    /// A typed `-`: part of the literal being entered when the lexer accepts
    /// it, a subtraction otherwise.
    pub fn minus(&mut self) -> Result<()> {
        if self.model.input_accept_minus() {
            self.model.input_push('-');
            return Ok(());
        }
        self.binary(BinaryOp::Sub)
    }

    pub fn undo(&mut self) -> Result<()> {
        let outcome = self.history.undo(&mut self.model);
        self.report("undo", outcome)
    }

    pub fn redo(&mut self) -> Result<()> {
        let outcome = self.history.redo(&mut self.model);
        self.report("redo", outcome)
    }

    fn run<F>(&mut self, operation: &'static str, body: F) -> Result<()>
    where
        F: FnOnce(&mut Transaction<'_>) -> Result<()>,
    {
        let outcome = {
            let mut transaction = Transaction::new(&mut self.model);
            body(&mut transaction).map(|()| transaction.release())
        };
        let outcome = outcome.map(|action| self.history.add(action));
        self.report(operation, outcome)
    }

    fn report(&mut self, operation: &'static str, outcome: Result<()>) -> Result<()> {
        match &outcome {
            Ok(()) => {
                debug!(operation, "operation succeeded");
                self.model.diagnostics_clear();
            }
            Err(error) => {
                debug!(operation, %error, "operation failed");
                self.model.diagnostics_set(error.to_string());
            }
        }
        outcome
    }
}

/// Moves the pending input onto the stack.
fn apply_input(transaction: &mut Transaction<'_>) -> Result<()> {
    if transaction.model().input().is_empty() {
        return Ok(());
    }
    let tokens = transaction.model().input_process();
    transaction.input_steal();
    tokens
        .iter()
        .try_for_each(|token| apply_token(transaction, token))
}

fn apply_token(transaction: &mut Transaction<'_>, token: &Token) -> Result<()> {
    let Token::String(name) = token else {
        transaction.push(literal::parse(token)?);
        return Ok(());
    };
    match dictionary::lookup(name) {
        Some(Entry::Constant(value)) => {
            transaction.push(value);
            Ok(())
        }
        Some(Entry::Command(Command::Unary(operation))) => apply_unary(transaction, operation),
        Some(Entry::Command(Command::Binary(operation))) => apply_binary(transaction, operation),
        Some(Entry::Command(Command::DebugToggle)) => {
            transaction.debug_mode_toggle();
            Ok(())
        }
        None => Err(CalcError::domain("Unknown command or constant")),
    }
}

fn apply_binary(transaction: &mut Transaction<'_>, operation: BinaryOp) -> Result<()> {
    if transaction.model().stack().size() < 2 {
        return Err(CalcError::out_of_range(
            "The stack doesn't contain two elements",
        ));
    }
    let rhs = transaction.pop()?;
    let lhs = transaction.pop()?;
    transaction.push(operation.apply(lhs, rhs)?);
    Ok(())
}

fn apply_unary(transaction: &mut Transaction<'_>, operation: UnaryOp) -> Result<()> {
    let value = transaction.pop()?;
    transaction.push(operation.apply(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorKind, Value};

    fn session_with(input: &str) -> Session {
        let mut session = Session::new();
        session.append(input);
        session
    }

    #[test]
    fn enter_pushes_input() {
        let mut session = session_with("1 0x10 i-3 2.5");
        session.model.diagnostics_set("Cleared");
        session.enter().unwrap();
        assert_eq!(session.stack_strings(), ["1", "16", "-3", "2.5"]);
        assert!(session.input().is_empty());
        assert!(session.diagnostics().is_empty());
    }

    #[test]
    fn enter_without_input_duplicates() {
        let mut session = session_with("7");
        session.enter().unwrap();
        session.enter().unwrap();
        assert_eq!(session.stack().values(), [Value::Unsigned(7), Value::Unsigned(7)]);

        let mut empty = Session::new();
        let error = empty.enter().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::OutOfRange);
        assert_eq!(empty.diagnostics(), "The stack doesn't contain an element");
    }

    #[test]
    fn command_words_execute() {
        let mut session = session_with("2 3 pow");
        session.enter().unwrap();
        assert_eq!(session.stack_strings(), ["8"]);
    }

    #[test]
    fn debug_command_toggles_suffixes() {
        let mut session = session_with("42 i-42 42.0 debug");
        session.enter().unwrap();
        assert_eq!(session.stack_strings(), ["42 |u", "-42 |i", "42 |d"]);

        session.undo().unwrap();
        assert!(!session.model().debug_mode());
        assert_eq!(session.input(), "42 i-42 42.0 debug");
    }

    #[test]
    fn constants_are_pushed() {
        for (name, expected) in [
            ("int8_min", "-128"),
            ("int64_min", "-9223372036854775808"),
            ("uint8_max", "255"),
            ("uint64_max", "18446744073709551615"),
            ("pi", "3.141592653589793"),
        ] {
            let mut session = session_with(name);
            session.append(" 0");
            session.enter().unwrap();
            assert_eq!(session.stack_strings(), [expected, "0"], "{name}");
        }
    }

    #[test]
    fn failed_enter_leaves_no_trace() {
        let mut session = session_with("1 2 nope");
        let error = session.enter().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Domain);
        assert_eq!(session.diagnostics(), "Unknown command or constant");
        assert!(session.stack().empty());
        assert_eq!(session.input(), "1 2 nope");
        assert!(!session.history().can_undo());

        let mut session = session_with("0b");
        assert_eq!(session.enter().unwrap_err().message(), "Invalid numeric value");
        assert_eq!(session.input(), "0b");
    }

    #[test]
    fn binary_uses_input_as_operands() {
        let mut session = session_with("10");
        session.enter().unwrap();
        session.append("4");
        session.binary(BinaryOp::Sub).unwrap();
        assert_eq!(session.stack().values(), [Value::Unsigned(6)]);

        session.append("i-7");
        session.binary(BinaryOp::Mul).unwrap();
        assert_eq!(session.stack().values(), [Value::Signed(-42)]);
    }

    #[test]
    fn binary_needs_two_elements() {
        let mut session = session_with("1");
        let error = session.binary(BinaryOp::Add).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::OutOfRange);
        assert_eq!(error.message(), "The stack doesn't contain two elements");
        assert!(session.stack().empty());
        assert_eq!(session.input(), "1");
    }

    #[test]
    fn division_by_zero_restores_operands() {
        let mut session = session_with("1 0");
        session.enter().unwrap();
        let error = session.binary(BinaryOp::Div).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Domain);
        assert_eq!(session.diagnostics(), "Division by zero");
        assert_eq!(session.stack().values(), [Value::Unsigned(1), Value::Unsigned(0)]);

        session.append("2");
        session.binary(BinaryOp::Add).unwrap();
        assert!(session.diagnostics().is_empty());
    }

    #[test]
    fn unary_operations() {
        let mut session = session_with("5");
        session.unary(UnaryOp::Negate).unwrap();
        assert_eq!(session.stack().values(), [Value::Signed(-5)]);

        assert_eq!(
            session.unary(UnaryOp::Round).unwrap_err().message(),
            "Not a floating-point"
        );
        assert_eq!(session.stack().values(), [Value::Signed(-5)]);

        let mut empty = Session::new();
        assert_eq!(
            empty.unary(UnaryOp::Complement).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn minus_extends_literal_or_subtracts() {
        let mut session = session_with("1e");
        session.minus().unwrap();
        assert_eq!(session.input(), "1e-");

        let mut session = session_with("5 7");
        session.minus().unwrap();
        assert_eq!(session.stack().values(), [Value::Signed(-2)]);
        assert!(session.input().is_empty());
    }

    #[test]
    fn backspace_edits_input_then_drops() {
        let mut session = session_with("12");
        session.backspace().unwrap();
        assert_eq!(session.input(), "1");
        assert!(!session.history().can_undo());

        session.enter().unwrap();
        session.backspace().unwrap();
        assert!(session.stack().empty());

        session.undo().unwrap();
        assert_eq!(session.stack().values(), [Value::Unsigned(1)]);

        session.undo().unwrap();
        session.undo().unwrap_err();
        assert_eq!(session.diagnostics(), "Undo stack underflow");

        let mut empty = Session::new();
        assert_eq!(empty.backspace().unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn undo_restores_input() {
        let mut session = session_with("42");
        session.enter().unwrap();
        session.undo().unwrap();
        assert!(session.stack().empty());
        assert_eq!(session.input(), "42");

        session.redo().unwrap();
        assert_eq!(session.stack().values(), [Value::Unsigned(42)]);
        assert!(session.input().is_empty());

        assert_eq!(session.redo().unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(session.diagnostics(), "Undo stack overflow");
    }

    #[test]
    fn history_depth_is_configurable() {
        let config = SessionConfig::default().with_history(HistoryConfig::new(1));
        let mut session = Session::with_config(config);
        session.append("1");
        session.enter().unwrap();
        session.append("2");
        session.enter().unwrap();

        session.undo().unwrap();
        assert!(session.undo().is_err());
        assert_eq!(session.stack().values(), [Value::Unsigned(1)]);
    }
}
