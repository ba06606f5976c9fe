//! Bounded linear undo/redo history of committed actions.

use super::transaction::Action;
use crate::core::{CalcError, Result};
use crate::session::Model;
use tracing::debug;

/// Limits applied to an [`UndoHistory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of undoable actions kept; the oldest is evicted first.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

impl HistoryConfig {
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// No depth limit.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

/// Actions plus two cursors.
///
/// `active` is the number of actions that can be undone, `head` is one past
/// the last redoable action. `0 <= active <= head <= len` always holds.
///
/// # Example
///
/// ```rust
/// use rpn_engine::core::Value;
/// use rpn_engine::history::{Transaction, UndoHistory};
/// use rpn_engine::session::Model;
///
/// let mut model = Model::new();
/// let mut history = UndoHistory::new();
///
/// let mut transaction = Transaction::new(&mut model);
/// transaction.push(Value::Unsigned(1));
/// history.add(transaction.release());
///
/// history.undo(&mut model).unwrap();
/// assert!(model.stack().empty());
/// history.redo(&mut model).unwrap();
/// assert_eq!(model.stack().values(), [Value::Unsigned(1)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UndoHistory {
    actions: Vec<Action>,
    active: usize,
    head: usize,
    config: HistoryConfig,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.active > 0
    }

    pub fn can_redo(&self) -> bool {
        self.active < self.head
    }

    /// Appends `action` at the cursor and discards every redoable action.
    pub fn add(&mut self, action: Action) {
        self.actions.truncate(self.active);
        self.actions.push(action);
        self.active += 1;
        self.head = self.active;

        while self.actions.len() > self.config.max_depth {
            self.actions.remove(0);
            self.active -= 1;
            self.head -= 1;
            debug!(max_depth = self.config.max_depth, "evicted oldest action");
        }
        debug!(active = self.active, head = self.head, "action added");
    }

    pub fn undo(&mut self, model: &mut Model) -> Result<()> {
        if self.active == 0 {
            return Err(CalcError::range("Undo stack underflow"));
        }
        self.actions[self.active - 1].undo(model)?;
        self.active -= 1;
        debug!(active = self.active, head = self.head, "undo");
        Ok(())
    }

    pub fn redo(&mut self, model: &mut Model) -> Result<()> {
        if self.active == self.head {
            return Err(CalcError::range("Undo stack overflow"));
        }
        self.actions[self.active].redo(model)?;
        self.active += 1;
        debug!(active = self.active, head = self.head, "redo");
        Ok(())
    }

    /// Forgets every action.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.active = 0;
        self.head = 0;
    }
}
