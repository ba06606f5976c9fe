//! Transactions and the undo/redo history built from them.
//!
//! Every user action runs inside a [`Transaction`]. On success it becomes an
//! [`Action`] stored in the [`UndoHistory`]; on failure it reverts itself.

mod transaction;
mod undo;

pub use transaction::{Action, Step, Transaction};
pub use undo::{HistoryConfig, UndoHistory};
