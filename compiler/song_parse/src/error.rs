//! Parse error types.

use song_lexer::{LexError, Span};
use thiserror::Error;

/// What kind of syntax error occurred.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Input ended in the middle of a statement. A REPL may ask for more.
    UnexpectedEof,
    /// A token that cannot appear here.
    UnexpectedToken,
    /// The lexer rejected the input.
    InvalidToken,
    /// Something other than a pattern in parameter or destructuring position.
    InvalidPattern,
    /// The left of `=` is not a name, call or list pattern, or a guard is misplaced.
    InvalidDeclaration,
}

/// A syntax error with its location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            kind,
            message: message.into(),
            span,
        }
    }

    /// Whether appending more input could make the source parse.
    #[inline]
    pub fn is_unexpected_eof(&self) -> bool {
        self.kind == ParseErrorKind::UnexpectedEof
    }
}

impl From<LexError> for ParseError {
    #[cold]
    fn from(err: LexError) -> Self {
        let kind = if err.is_unexpected_eof() {
            ParseErrorKind::UnexpectedEof
        } else {
            ParseErrorKind::InvalidToken
        };
        ParseError::new(kind, err.to_string(), err.span)
    }
}
