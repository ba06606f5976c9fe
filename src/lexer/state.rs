//! State trait shared by the sub-lexer state machines.
//!
//! Every sub-lexer keeps its position in a small `Copy` enum. The lexer only
//! needs to ask those states three things, so they implement this trait
//! instead of exposing their variants.

use std::fmt::Debug;

/// Trait for sub-lexer states.
///
/// All methods are pure. A state is an immutable description of where the
/// sub-lexer is inside the literal grammar.
///
/// # Example
///
/// ```rust
/// use rpn_engine::lexer::LexState;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Digits {
///     Required,
///     Optional,
/// }
///
/// impl LexState for Digits {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Required => "required_number",
///             Self::Optional => "optional_number",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Optional)
///     }
/// }
///
/// assert!(!Digits::Required.is_final());
/// assert!(!Digits::Optional.accepts_minus());
/// ```
pub trait LexState: Copy + PartialEq + Debug {
    /// The state's name for logging.
    fn name(&self) -> &'static str;

    /// Whether forcing completion in this state yields a valid literal.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether a `-` typed now continues the literal.
    ///
    /// Default implementation returns `false`.
    fn accepts_minus(&self) -> bool {
        false
    }
}
