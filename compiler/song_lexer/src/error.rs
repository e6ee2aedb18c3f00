use thiserror::Error;

use crate::Span;

/// What went wrong while lexing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// Logos' catch-all; refined with the offending character once known.
    #[default]
    #[error("unexpected character")]
    UnexpectedInput,
    #[error("unexpected character `{0}`")]
    UnknownCharacter(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("invalid escape `\\{0}`")]
    InvalidEscape(char),
    #[error("empty character literal")]
    EmptyChar,
    #[error("character literal holds more than one character")]
    MultiCharLiteral,
    #[error("integer literal does not fit in 64 bits")]
    IntOverflow,
    #[error("malformed float literal")]
    InvalidFloat,
}

/// A lexing failure with its location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at byte {}", span.start)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    /// Whether more input could complete the literal.
    pub fn is_unexpected_eof(&self) -> bool {
        self.kind == LexErrorKind::UnterminatedString
    }
}
