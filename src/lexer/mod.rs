//! Incremental lexer for calculator input.
//!
//! The lexer is fed one character at a time as the user types. A space
//! completes the token under construction; [`Lexer::finish`] forces
//! completion at the end of input. Lexing never fails: malformed literals
//! become [`Token::Invalid`] and everything non-numeric becomes
//! [`Token::String`], leaving the decision to the caller.
//!
//! # Example
//!
//! ```rust
//! use rpn_engine::lexer::{Lexer, Token};
//!
//! let mut lexer = Lexer::new();
//! lexer.feed_str("0x1_f 2.5e");
//! assert!(lexer.accept_minus());
//! lexer.feed('-');
//! lexer.feed_str("1 i-7 pi");
//!
//! assert_eq!(
//!     lexer.process(),
//!     [
//!         Token::Unsigned("0x1f".into()),
//!         Token::Float("2.5e-1".into()),
//!         Token::Signed("-7".into()),
//!         Token::String("pi".into()),
//!     ]
//! );
//! ```

mod machine;
mod state;
mod token;

pub use state::LexState;
pub use token::Token;

use machine::SubLexer;
use tracing::trace;

/// The only character that separates tokens.
pub const SEPARATOR: char = ' ';

/// Character-driven tokenizer.
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    active: Option<SubLexer>,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one character.
    ///
    /// A separator completes the current token; separators without a token
    /// in progress are ignored.
    pub fn feed(&mut self, c: char) {
        if c == SEPARATOR {
            self.complete();
            return;
        }
        let next = match self.active.take() {
            Some(lexer) => lexer.step(c),
            None => SubLexer::start(c),
        };
        self.active = Some(next);
    }

    pub fn feed_str(&mut self, input: &str) {
        input.chars().for_each(|c| self.feed(c));
    }

    /// Forces completion of the token in progress, if any.
    pub fn finish(&mut self) {
        self.complete();
    }

    /// Finishes the input and returns every token produced so far.
    pub fn process(&mut self) -> &[Token] {
        self.finish();
        &self.tokens
    }

    /// Takes the completed tokens, leaving any token in progress untouched.
    pub fn drain(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.tokens)
    }

    /// Discards the token in progress and all completed tokens.
    pub fn reset(&mut self) {
        self.active = None;
        self.tokens.clear();
    }

    /// Whether a `-` typed now belongs to the literal in progress.
    ///
    /// Callers use this to tell an exponent or signed-literal minus apart
    /// from the subtraction operator.
    pub fn accept_minus(&self) -> bool {
        self.active.as_ref().is_some_and(SubLexer::accepts_minus)
    }

    /// Whether a token is under construction.
    pub fn is_pending(&self) -> bool {
        self.active.is_some()
    }

    fn complete(&mut self) {
        if let Some(lexer) = self.active.take() {
            let token = lexer.finish();
            trace!(token = ?token, "token completed");
            self.tokens.push(token);
        }
    }
}

/// Lexes a complete input string.
///
/// ```rust
/// use rpn_engine::lexer::{lex, Token};
///
/// assert_eq!(lex("i"), [Token::String("i".into())]);
/// assert_eq!(lex("0b"), [Token::Invalid]);
/// ```
pub fn lex(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new();
    lexer.feed_str(input);
    lexer.finish();
    lexer.drain()
}
