//! Sub-lexer state machines.
//!
//! Each token kind has its own small machine. A machine consumes one
//! character at a time and returns the machine that should see the next
//! character, which is how a token is re-classified mid-way: the unsigned
//! machine hands its buffer to a float machine on `.` or `e`, and the signed
//! machine degrades into a string machine when no digit follows the `i`.

use super::state::LexState;
use super::token::Token;
use tracing::trace;

/// Characters that may be used to group digits. They never reach a token.
pub(crate) fn is_grouping(c: char) -> bool {
    c == '_' || c == ','
}

/// The machine currently building a token.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SubLexer {
    Unsigned(UnsignedLexer),
    Float(FloatLexer),
    Signed(SignedLexer),
    String(String),
    Invalid,
}

impl SubLexer {
    /// Picks the machine for the first character of a token and feeds it.
    pub(crate) fn start(c: char) -> Self {
        let fresh = match c {
            '.' => Self::Float(FloatLexer::default()),
            'i' => Self::Signed(SignedLexer::default()),
            c if c.is_ascii_digit() => Self::Unsigned(UnsignedLexer::default()),
            _ => Self::String(String::new()),
        };
        fresh.step(c)
    }

    /// Feeds one non-separator character.
    pub(crate) fn step(self, c: char) -> Self {
        match self {
            Self::Unsigned(lexer) => lexer.step(c),
            Self::Float(lexer) => lexer.step(c),
            Self::Signed(lexer) => lexer.step(c),
            Self::String(mut buffer) => {
                buffer.push(c);
                Self::String(buffer)
            }
            Self::Invalid => Self::Invalid,
        }
    }

    /// Forces completion of the token under construction.
    pub(crate) fn finish(self) -> Token {
        match self {
            Self::Unsigned(lexer) => lexer.finish(),
            Self::Float(lexer) => lexer.finish(),
            Self::Signed(lexer) => lexer.finish(),
            Self::String(buffer) => Token::String(buffer),
            Self::Invalid => Token::Invalid,
        }
    }

    pub(crate) fn accepts_minus(&self) -> bool {
        match self {
            Self::Float(lexer) => lexer.state.accepts_minus(),
            Self::Signed(lexer) => lexer.state.accepts_minus(),
            Self::Unsigned(_) | Self::String(_) | Self::Invalid => false,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Unsigned(lexer) => lexer.state.name(),
            Self::Float(lexer) => lexer.state.name(),
            Self::Signed(lexer) => lexer.state.name(),
            Self::String(_) => "string",
            Self::Invalid => "invalid",
        }
    }
}

/// Feeds `buffer` into a fresh machine, character by character.
fn hand_off(target: SubLexer, buffer: &str) -> SubLexer {
    let result = buffer.chars().fold(target, SubLexer::step);
    trace!(replayed = buffer, to = result.name(), "sub-lexer hand-off");
    result
}

fn invalid(from: &'static str, c: char) -> SubLexer {
    trace!(state = from, character = %c, "invalid literal");
    SubLexer::Invalid
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum UnsignedState {
    Initial,
    OptionalPrefix,
    RequiredNumber,
    OptionalNumber,
}

impl LexState for UnsignedState {
    fn name(&self) -> &'static str {
        match self {
            Self::Initial => "unsigned.initial",
            Self::OptionalPrefix => "unsigned.optional_prefix",
            Self::RequiredNumber => "unsigned.required_number",
            Self::OptionalNumber => "unsigned.optional_number",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::OptionalPrefix | Self::OptionalNumber)
    }
}

/// Integer literal in base 2, 8, 10 or 16.
///
/// The buffer keeps the base prefix, so `0x1f` is emitted as `0x1f`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct UnsignedLexer {
    state: UnsignedState,
    radix: u32,
    buffer: String,
}

impl Default for UnsignedLexer {
    fn default() -> Self {
        Self {
            state: UnsignedState::Initial,
            radix: 10,
            buffer: String::new(),
        }
    }
}

impl UnsignedLexer {
    fn step(mut self, c: char) -> SubLexer {
        match self.state {
            UnsignedState::Initial => {
                self.buffer.push(c);
                self.state = if c == '0' {
                    UnsignedState::OptionalPrefix
                } else {
                    UnsignedState::OptionalNumber
                };
            }
            UnsignedState::OptionalPrefix => {
                if is_grouping(c) {
                    return SubLexer::Unsigned(self);
                }
                self.buffer.push(c);
                match c {
                    '.' | 'e' => return hand_off(SubLexer::Float(FloatLexer::default()), &self.buffer),
                    'b' => {
                        self.radix = 2;
                        self.state = UnsignedState::RequiredNumber;
                    }
                    'x' => {
                        self.radix = 16;
                        self.state = UnsignedState::RequiredNumber;
                    }
                    '0'..='7' => {
                        self.radix = 8;
                        self.state = UnsignedState::OptionalNumber;
                    }
                    _ => return invalid(self.state.name(), c),
                }
            }
            UnsignedState::RequiredNumber | UnsignedState::OptionalNumber => {
                if is_grouping(c) {
                    if self.state == UnsignedState::RequiredNumber {
                        return invalid(self.state.name(), c);
                    }
                    return SubLexer::Unsigned(self);
                }
                if self.radix == 10 && (c == '.' || c == 'e') {
                    self.buffer.push(c);
                    return hand_off(SubLexer::Float(FloatLexer::default()), &self.buffer);
                }
                if c.to_digit(self.radix).is_none() {
                    return invalid(self.state.name(), c);
                }
                self.buffer.push(c);
                self.state = UnsignedState::OptionalNumber;
            }
        }
        SubLexer::Unsigned(self)
    }

    fn finish(self) -> Token {
        if self.state.is_final() {
            Token::Unsigned(self.buffer)
        } else {
            Token::Invalid
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum FloatState {
    Initial,
    RequiredNumberOrDotOrE,
    RequiredNumberOrE,
    OptionalNumberOrE,
    RequiredMinusOrNumber,
    RequiredNumber,
    OptionalNumber,
}

impl LexState for FloatState {
    fn name(&self) -> &'static str {
        match self {
            Self::Initial => "float.initial",
            Self::RequiredNumberOrDotOrE => "float.required_number_or_dot_or_e",
            Self::RequiredNumberOrE => "float.required_number_or_e",
            Self::OptionalNumberOrE => "float.optional_number_or_e",
            Self::RequiredMinusOrNumber => "float.required_minus_or_number",
            Self::RequiredNumber => "float.required_number",
            Self::OptionalNumber => "float.optional_number",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::OptionalNumberOrE | Self::OptionalNumber)
    }

    fn accepts_minus(&self) -> bool {
        matches!(self, Self::RequiredMinusOrNumber)
    }
}

/// Decimal floating-point literal: `digits[.digits][e[-]digits]` or
/// `.digits[e[-]digits]`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FloatLexer {
    state: FloatState,
    buffer: String,
}

impl Default for FloatLexer {
    fn default() -> Self {
        Self {
            state: FloatState::Initial,
            buffer: String::new(),
        }
    }
}

impl FloatLexer {
    fn step(mut self, c: char) -> SubLexer {
        match self.state {
            FloatState::Initial => {
                self.buffer.push(c);
                self.state = if c == '.' {
                    FloatState::RequiredNumberOrE
                } else {
                    FloatState::RequiredNumberOrDotOrE
                };
            }
            FloatState::RequiredNumberOrDotOrE if c == '.' => {
                self.buffer.push(c);
                self.state = FloatState::OptionalNumberOrE;
            }
            FloatState::RequiredNumberOrDotOrE
            | FloatState::RequiredNumberOrE
            | FloatState::OptionalNumberOrE => {
                if self.state == FloatState::RequiredNumberOrE {
                    self.state = FloatState::OptionalNumberOrE;
                }
                return self.mantissa(c);
            }
            FloatState::RequiredMinusOrNumber => {
                if c == '-' {
                    self.buffer.push(c);
                    self.state = FloatState::RequiredNumber;
                } else if c.is_ascii_digit() {
                    self.buffer.push(c);
                    self.state = FloatState::OptionalNumber;
                } else {
                    return invalid(self.state.name(), c);
                }
            }
            FloatState::RequiredNumber | FloatState::OptionalNumber => {
                if is_grouping(c) && self.state == FloatState::OptionalNumber {
                    return SubLexer::Float(self);
                }
                if !c.is_ascii_digit() {
                    return invalid(self.state.name(), c);
                }
                self.buffer.push(c);
                self.state = FloatState::OptionalNumber;
            }
        }
        SubLexer::Float(self)
    }

    /// Digits before the exponent, or the `e` starting it.
    fn mantissa(mut self, c: char) -> SubLexer {
        if is_grouping(c) {
            // Only a committed digit can be grouped.
            if self.buffer.ends_with(|d: char| d.is_ascii_digit()) {
                return SubLexer::Float(self);
            }
            return invalid(self.state.name(), c);
        }
        if c == 'e' {
            self.buffer.push(c);
            self.state = FloatState::RequiredMinusOrNumber;
            return SubLexer::Float(self);
        }
        if !c.is_ascii_digit() {
            return invalid(self.state.name(), c);
        }
        self.buffer.push(c);
        SubLexer::Float(self)
    }

    fn finish(self) -> Token {
        if self.state.is_final() {
            Token::Float(self.buffer)
        } else {
            Token::Invalid
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum SignedState {
    Initial,
    RequiredMinusOrNumber,
    RequiredNumber,
    OptionalNumber,
}

impl LexState for SignedState {
    fn name(&self) -> &'static str {
        match self {
            Self::Initial => "signed.initial",
            Self::RequiredMinusOrNumber => "signed.required_minus_or_number",
            Self::RequiredNumber => "signed.required_number",
            Self::OptionalNumber => "signed.optional_number",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::OptionalNumber)
    }

    fn accepts_minus(&self) -> bool {
        matches!(self, Self::RequiredMinusOrNumber)
    }
}

/// Decimal signed literal `i[-]digits`. The buffer excludes the `i`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SignedLexer {
    state: SignedState,
    has_minus: bool,
    buffer: String,
}

impl Default for SignedLexer {
    fn default() -> Self {
        Self {
            state: SignedState::Initial,
            has_minus: false,
            buffer: String::new(),
        }
    }
}

impl SignedLexer {
    fn step(mut self, c: char) -> SubLexer {
        match self.state {
            SignedState::Initial => {
                self.state = SignedState::RequiredMinusOrNumber;
            }
            SignedState::RequiredMinusOrNumber => {
                self.buffer.push(c);
                if c == '-' {
                    self.has_minus = true;
                    self.state = SignedState::RequiredNumber;
                } else if c.is_ascii_digit() {
                    self.state = SignedState::OptionalNumber;
                } else {
                    return self.degrade();
                }
            }
            SignedState::RequiredNumber | SignedState::OptionalNumber => {
                if is_grouping(c) && self.state == SignedState::OptionalNumber {
                    return SubLexer::Signed(self);
                }
                self.buffer.push(c);
                if !c.is_ascii_digit() {
                    if self.has_minus {
                        return invalid(self.state.name(), c);
                    }
                    return self.degrade();
                }
                self.state = SignedState::OptionalNumber;
            }
        }
        SubLexer::Signed(self)
    }

    /// Turns the text seen so far, including the `i`, into a string token.
    fn degrade(self) -> SubLexer {
        hand_off(SubLexer::String(String::new()), &format!("i{}", self.buffer))
    }

    fn finish(self) -> Token {
        if self.state.is_final() {
            Token::Signed(self.buffer)
        } else if self.has_minus {
            Token::Invalid
        } else {
            Token::String(format!("i{}", self.buffer))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> SubLexer {
        let mut chars = input.chars();
        let first = chars.next().expect("non-empty input");
        chars.fold(SubLexer::start(first), SubLexer::step)
    }

    fn lex_one(input: &str) -> Token {
        run(input).finish()
    }

    #[test]
    fn dispatch_on_first_character() {
        assert!(matches!(run("1"), SubLexer::Unsigned(_)));
        assert!(matches!(run("."), SubLexer::Float(_)));
        assert!(matches!(run("i"), SubLexer::Signed(_)));
        assert!(matches!(run("a"), SubLexer::String(_)));
        assert!(matches!(run("-"), SubLexer::String(_)));
    }

    #[test]
    fn unsigned_keeps_base_prefix() {
        assert_eq!(lex_one("0"), Token::Unsigned("0".into()));
        assert_eq!(lex_one("0b1010"), Token::Unsigned("0b1010".into()));
        assert_eq!(lex_one("0x1fA"), Token::Unsigned("0x1fA".into()));
        assert_eq!(lex_one("0777"), Token::Unsigned("0777".into()));
        assert_eq!(lex_one("007"), Token::Unsigned("007".into()));
        assert_eq!(lex_one("00"), Token::Unsigned("00".into()));
        assert_eq!(lex_one("1234"), Token::Unsigned("1234".into()));
    }

    #[test]
    fn unsigned_rejects_digits_outside_base() {
        assert_eq!(lex_one("08"), Token::Invalid);
        assert_eq!(lex_one("0779"), Token::Invalid);
        assert_eq!(lex_one("0b1002"), Token::Invalid);
        assert_eq!(lex_one("0x1g"), Token::Invalid);
        assert_eq!(lex_one("0z"), Token::Invalid);
        assert_eq!(lex_one("100a"), Token::Invalid);
    }

    #[test]
    fn unsigned_requires_digit_after_prefix() {
        assert_eq!(lex_one("0b"), Token::Invalid);
        assert_eq!(lex_one("0x"), Token::Invalid);
        assert_eq!(lex_one("0x_1"), Token::Invalid);
    }

    #[test]
    fn unsigned_hands_off_to_float() {
        assert!(matches!(run("12."), SubLexer::Float(_)));
        assert!(matches!(run("0e"), SubLexer::Float(_)));
        assert_eq!(lex_one("12.5"), Token::Float("12.5".into()));
        assert_eq!(lex_one("0.5"), Token::Float("0.5".into()));
        assert_eq!(lex_one("0x1e"), Token::Unsigned("0x1e".into()));
        assert_eq!(lex_one("01."), Token::Invalid);
    }

    #[test]
    fn grouping_is_dropped_after_digits() {
        assert_eq!(lex_one("1_,2__3,"), Token::Unsigned("123".into()));
        assert_eq!(lex_one("0b1_0"), Token::Unsigned("0b10".into()));
        assert_eq!(
            lex_one("1_,2_,_3,_,.e-1_,0_,"),
            Token::Float("123.e-10".into())
        );
        assert_eq!(lex_one("1.5_5"), Token::Float("1.55".into()));
    }

    #[test]
    fn grouping_after_dot_or_exponent_is_invalid() {
        assert_eq!(lex_one("1._5"), Token::Invalid);
        assert_eq!(lex_one("1e_5"), Token::Invalid);
        assert_eq!(lex_one("1e-_5"), Token::Invalid);
    }

    #[test]
    fn float_grammar() {
        assert_eq!(lex_one("1."), Token::Float("1.".into()));
        assert_eq!(lex_one("1e1"), Token::Float("1e1".into()));
        assert_eq!(lex_one("1.e1"), Token::Float("1.e1".into()));
        assert_eq!(lex_one(".5"), Token::Float(".5".into()));
        assert_eq!(lex_one(".5e-3"), Token::Float(".5e-3".into()));
        for input in [".", "..", "0..", ".0.", "1e.", "1e1.", "123.e", "123.e-"] {
            assert_eq!(lex_one(input), Token::Invalid, "{input}");
        }
    }

    #[test]
    fn float_accepts_minus_only_after_exponent() {
        assert!(!run("1.").accepts_minus());
        assert!(run("1e").accepts_minus());
        assert!(!run("1e-").accepts_minus());
        assert!(!run("1e-1").accepts_minus());
    }

    #[test]
    fn signed_grammar() {
        assert_eq!(lex_one("i42"), Token::Signed("42".into()));
        assert_eq!(lex_one("i-42"), Token::Signed("-42".into()));
        assert_eq!(lex_one("i-4_2"), Token::Signed("-42".into()));
        assert!(run("i").accepts_minus());
        assert!(!run("i-").accepts_minus());
    }

    #[test]
    fn signed_degrades_to_string() {
        assert_eq!(lex_one("i"), Token::String("i".into()));
        assert_eq!(lex_one("iabc"), Token::String("iabc".into()));
        assert_eq!(lex_one("i0'"), Token::String("i0'".into()));
        assert_eq!(lex_one("i,-1"), Token::String("i,-1".into()));
        assert!(matches!(run("inf"), SubLexer::String(_)));
    }

    #[test]
    fn signed_after_minus_never_degrades() {
        assert_eq!(lex_one("i-"), Token::Invalid);
        assert_eq!(lex_one("i-a"), Token::Invalid);
        assert_eq!(lex_one("i-,1"), Token::Invalid);
        assert_eq!(lex_one("i-1a"), Token::Invalid);
    }

    #[test]
    fn string_and_invalid_absorb_everything() {
        assert_eq!(lex_one("e-1"), Token::String("e-1".into()));
        assert_eq!(lex_one("pi"), Token::String("pi".into()));
        assert_eq!(lex_one("0z123"), Token::Invalid);
    }

    #[test]
    fn state_names_identify_the_machine() {
        assert_eq!(run("0").name(), "unsigned.optional_prefix");
        assert_eq!(run("0x").name(), "unsigned.required_number");
        assert_eq!(run(".").name(), "float.required_number_or_e");
        assert_eq!(run("i-").name(), "signed.required_number");
        assert_eq!(run("abc").name(), "string");
    }
}
