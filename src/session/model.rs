//! Calculator state owned by one session.
//!
//! The model holds the stack, the pending input line and the diagnostics
//! shown to the user. The input line is mirrored into a [`Lexer`] as it is
//! edited so the lexer can tell whether a typed `-` belongs to a literal.

use crate::core::Stack;
use crate::lexer::{Lexer, Token};

#[derive(Clone, Debug, Default)]
pub struct Model {
    diagnostics: String,
    stack: Stack,
    input: String,
    lexer: Lexer,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    // Diagnostics

    pub fn diagnostics(&self) -> &str {
        &self.diagnostics
    }

    pub fn diagnostics_set(&mut self, diagnostics: impl Into<String>) {
        self.diagnostics = diagnostics.into();
    }

    pub fn diagnostics_clear(&mut self) {
        self.diagnostics.clear();
    }

    // Stack

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    pub fn debug_mode(&self) -> bool {
        self.stack.debug_mode()
    }

    pub fn debug_mode_toggle(&mut self) {
        self.stack.debug_mode_toggle();
    }

    // Input

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_push(&mut self, c: char) {
        self.input.push(c);
        self.lexer.feed(c);
    }

    pub fn input_append(&mut self, data: &str) {
        self.input.push_str(data);
        self.lexer.feed_str(data);
    }

    /// Removes the last input character; returns whether one was removed.
    pub fn input_pop_back(&mut self) -> bool {
        if self.input.pop().is_none() {
            return false;
        }
        self.relex();
        true
    }

    /// Empties the input and returns what it held.
    pub fn input_steal(&mut self) -> String {
        self.lexer.reset();
        std::mem::take(&mut self.input)
    }

    /// Replaces the input, e.g. when undoing an [`input_steal`](Self::input_steal).
    pub fn input_restore(&mut self, input: String) {
        self.input = input;
        self.relex();
    }

    /// Whether a `-` typed now continues the literal being entered.
    pub fn input_accept_minus(&self) -> bool {
        self.lexer.accept_minus()
    }

    /// Tokens of the complete input line. The input itself is left as is.
    pub fn input_process(&self) -> Vec<Token> {
        let mut lexer = self.lexer.clone();
        lexer.finish();
        lexer.drain()
    }

    fn relex(&mut self) {
        self.lexer.reset();
        self.lexer.feed_str(&self.input);
    }
}
