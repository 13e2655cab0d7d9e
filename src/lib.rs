#[macro_use]
mod macros;
mod api;
mod duration_value;
mod engine;
mod grammar;
mod locale;

pub use api::{
    DurationTranslator, NumberTranslator, TokenSequence, translate_durations, translate_numbers,
};
pub use duration_value::DurationValue;
pub use engine::RunMetrics;
pub use locale::{DEFAULT_LOCALE, LocaleError, supported_locales};

// --- Core output types --------------------------------------------------------

/// Byte span into the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// What a token was recognized as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A cardinal number, with its resolved value.
    Number(f64),
    /// A time duration.
    Duration(DurationValue),
    /// A stretch of input no grammar claimed. Kept verbatim.
    Literal,
}

/// One segment of translated input.
///
/// Tokens tile the input: concatenating each `body` in order reproduces the
/// original text byte for byte. Value token spans never include surrounding
/// whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What this segment was recognized as.
    pub kind: TokenKind,
    /// Slice of the original input covered by this token.
    pub body: String,
    /// Byte range of `body` in the original input.
    pub span: Span,
}

impl Token {
    /// True for stretches no grammar claimed.
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, TokenKind::Literal)
    }

    /// The numeric value, when this token is a number.
    pub fn number(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(value) => Some(value),
            _ => None,
        }
    }

    /// The duration value, when this token is a duration.
    pub fn duration(&self) -> Option<DurationValue> {
        match self.kind {
            TokenKind::Duration(value) => Some(value),
            _ => None,
        }
    }
}
