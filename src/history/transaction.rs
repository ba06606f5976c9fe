//! Reversible mutations grouped per user action.
//!
//! A [`Transaction`] performs mutations on a [`Model`] and records, for each
//! mutation that succeeded, a [`Step`] describing how to reverse it. On
//! success the transaction is released into an [`Action`] for the undo
//! history. A transaction that is dropped or aborted before release replays
//! its steps backwards, so a failed user action leaves no trace.
//!
//! # Example
//!
//! ```rust
//! use rpn_engine::core::Value;
//! use rpn_engine::history::Transaction;
//! use rpn_engine::session::Model;
//!
//! let mut model = Model::new();
//! model.stack_mut().push(Value::Unsigned(1));
//!
//! let result: rpn_engine::core::Result<()> = (|| {
//!     let mut transaction = Transaction::new(&mut model);
//!     transaction.pop()?;
//!     transaction.pop()?; // fails, the first pop is rolled back
//!     Ok(())
//! })();
//!
//! assert!(result.is_err());
//! assert_eq!(model.stack().values(), [Value::Unsigned(1)]);
//! ```

use crate::core::{Result, Value};
use crate::session::Model;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One primitive mutation, stored with what is needed to reverse it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Step {
    /// A value was pushed; undo drops it.
    Pushed(Value),
    /// A value was popped; undo pushes it back.
    Popped(Value),
    /// The top value was duplicated; undo drops the copy.
    Duplicated,
    /// The input was emptied; undo restores the stored text.
    InputReplaced(String),
    /// Debug display mode was flipped; undo flips it back.
    Toggled,
}

impl Step {
    pub fn undo(&self, model: &mut Model) -> Result<()> {
        match self {
            Self::Pushed(_) | Self::Duplicated => model.stack_mut().drop(),
            Self::Popped(value) => {
                model.stack_mut().push(*value);
                Ok(())
            }
            Self::InputReplaced(input) => {
                model.input_restore(input.clone());
                Ok(())
            }
            Self::Toggled => {
                model.debug_mode_toggle();
                Ok(())
            }
        }
    }

    pub fn redo(&self, model: &mut Model) -> Result<()> {
        match self {
            Self::Pushed(value) => {
                model.stack_mut().push(*value);
                Ok(())
            }
            Self::Popped(_) => model.stack_mut().drop(),
            Self::Duplicated => model.stack_mut().duplicate(),
            Self::InputReplaced(_) => {
                model.input_steal();
                Ok(())
            }
            Self::Toggled => {
                model.debug_mode_toggle();
                Ok(())
            }
        }
    }
}

/// An ordered group of steps forming one undoable user action.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Action {
    steps: Vec<Step>,
}

impl Action {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Reverses every step, last step first.
    pub fn undo(&self, model: &mut Model) -> Result<()> {
        self.steps.iter().rev().try_for_each(|step| step.undo(model))
    }

    /// Re-applies every step in recorded order.
    pub fn redo(&self, model: &mut Model) -> Result<()> {
        self.steps.iter().try_for_each(|step| step.redo(model))
    }
}

/// Scope of one user action over a [`Model`].
///
/// Every mutator first performs the mutation and only records a [`Step`]
/// once it succeeded.
pub struct Transaction<'a> {
    model: &'a mut Model,
    steps: Vec<Step>,
}

impl<'a> Transaction<'a> {
    pub fn new(model: &'a mut Model) -> Self {
        Self {
            model,
            steps: Vec::new(),
        }
    }

    /// Read access to the model being mutated.
    pub fn model(&self) -> &Model {
        self.model
    }

    /// Steps recorded so far.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn push(&mut self, value: Value) {
        self.model.stack_mut().push(value);
        self.steps.push(Step::Pushed(value));
    }

    pub fn pop(&mut self) -> Result<Value> {
        let value = self.model.stack_mut().pop()?;
        self.steps.push(Step::Popped(value));
        Ok(value)
    }

    pub fn drop(&mut self) -> Result<()> {
        self.pop().map(|_| ())
    }

    pub fn duplicate(&mut self) -> Result<()> {
        self.model.stack_mut().duplicate()?;
        self.steps.push(Step::Duplicated);
        Ok(())
    }

    /// Empties the input line and returns its previous content.
    pub fn input_steal(&mut self) -> String {
        let input = self.model.input_steal();
        self.steps.push(Step::InputReplaced(input.clone()));
        input
    }

    pub fn debug_mode_toggle(&mut self) {
        self.model.debug_mode_toggle();
        self.steps.push(Step::Toggled);
    }

    /// Finalizes the transaction; no rollback happens afterwards.
    #[must_use = "the action must be added to the undo history"]
    pub fn release(mut self) -> Action {
        let steps = std::mem::take(&mut self.steps);
        debug!(steps = steps.len(), "transaction committed");
        Action::new(steps)
    }

    /// Alias of [`release`](Self::release).
    #[must_use = "the action must be added to the undo history"]
    pub fn commit(self) -> Action {
        self.release()
    }

    /// Reverts every recorded step now.
    pub fn abort(mut self) -> Result<()> {
        self.rollback()
    }

    fn rollback(&mut self) -> Result<()> {
        let steps = std::mem::take(&mut self.steps);
        if steps.is_empty() {
            return Ok(());
        }
        debug!(steps = steps.len(), "transaction rolled back");
        steps.iter().rev().try_for_each(|step| step.undo(self.model))
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.rollback() {
            warn!(%error, "transaction rollback failed");
        }
    }
}
