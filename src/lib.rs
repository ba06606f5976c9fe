//! RPN Engine: the core of a reverse Polish notation calculator
//!
//! Characters typed by the user are classified incrementally into numeric and
//! command tokens, evaluated against a stack of numbers with exact-when-possible
//! type promotion, and every state change is recorded so it can be undone.
//!
//! # Core Concepts
//!
//! - **Value**: a signed, unsigned or floating-point number ([`core::Value`])
//! - **Lexer**: character-driven token classifier ([`lexer::Lexer`])
//! - **Math**: operators that widen, compute exactly and narrow again ([`math`])
//! - **History**: self-reverting transactions and linear undo/redo ([`history`])
//! - **Session**: the calculator controller tying the above together ([`session::Session`])
//!
//! # Example
//!
//! ```rust
//! use rpn_engine::core::Value;
//! use rpn_engine::math::BinaryOp;
//! use rpn_engine::Session;
//!
//! let mut session = Session::new();
//! session.append("i9223372036854775807 1");
//! session.binary(BinaryOp::Add).unwrap();
//!
//! // The sum does not fit an i64 but it does fit a u64.
//! assert_eq!(session.stack().values(), [Value::Unsigned(9_223_372_036_854_775_808)]);
//!
//! session.undo().unwrap();
//! assert!(session.stack().empty());
//! ```

pub mod core;
pub mod history;
pub mod lexer;
pub mod math;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CalcError, Stack, Value};
pub use history::{HistoryConfig, Transaction, UndoHistory};
pub use lexer::{Lexer, Token};
pub use session::{Session, SessionConfig};
