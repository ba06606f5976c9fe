//! The calculator stack.
//!
//! Values are appended at the back, so index 0 holds the oldest element.
//! A shadow vector caches the rendered form of every value; it always has
//! the same length as the value vector and an empty slot means "stale".

use super::error::{CalcError, Result};
use super::value::Value;

const EMPTY_STACK: &str = "The stack doesn't contain an element";

/// LIFO sequence of values with a lazily rebuilt display cache.
///
/// # Example
///
/// ```rust
/// use rpn_engine::core::{Stack, Value};
///
/// let mut stack = Stack::new();
/// stack.push(Value::Unsigned(1));
/// stack.duplicate().unwrap();
/// assert_eq!(stack.strings(), ["1", "1"]);
///
/// stack.debug_mode_toggle();
/// assert_eq!(stack.strings(), ["1 |u", "1 |u"]);
///
/// assert_eq!(stack.pop().unwrap(), Value::Unsigned(1));
/// assert_eq!(stack.size(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Stack {
    values: Vec<Value>,
    strings: Vec<String>,
    dirty: bool,
    debug_mode: bool,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values, oldest first.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The most recently pushed value.
    pub fn top(&self) -> Option<&Value> {
        self.values.last()
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
        self.strings.push(String::new());
        self.dirty = true;
    }

    /// Removes and returns the top value.
    pub fn pop(&mut self) -> Result<Value> {
        let value = self
            .values
            .pop()
            .ok_or_else(|| CalcError::out_of_range(EMPTY_STACK))?;
        self.strings.pop();
        Ok(value)
    }

    /// Removes the top value without returning it.
    pub fn drop(&mut self) -> Result<()> {
        self.pop().map(|_| ())
    }

    /// Pushes a copy of the top value; the cached rendering is shared.
    pub fn duplicate(&mut self) -> Result<()> {
        let top = *self
            .values
            .last()
            .ok_or_else(|| CalcError::out_of_range(EMPTY_STACK))?;
        let rendered = self.strings.last().cloned().unwrap_or_default();
        if rendered.is_empty() {
            self.dirty = true;
        }
        self.values.push(top);
        self.strings.push(rendered);
        Ok(())
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Flips between plain rendering and rendering with a kind suffix.
    pub fn debug_mode_toggle(&mut self) {
        self.debug_mode = !self.debug_mode;
        self.invalidate_cache();
    }

    /// Rendered values, oldest first.
    pub fn strings(&mut self) -> &[String] {
        self.synchronise_display();
        &self.strings
    }

    fn invalidate_cache(&mut self) {
        self.strings.iter_mut().for_each(String::clear);
        self.dirty = true;
    }

    fn synchronise_display(&mut self) {
        if !self.dirty {
            return;
        }
        for (slot, value) in self.strings.iter_mut().zip(&self.values) {
            if slot.is_empty() {
                *slot = render(value, self.debug_mode);
            }
        }
        self.dirty = false;
    }
}

fn render(value: &Value, debug_mode: bool) -> String {
    if debug_mode {
        format!("{value} {}", value.debug_suffix())
    } else {
        value.to_string()
    }
}
