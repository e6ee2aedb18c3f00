//! Song lexer: source text to a flat token list.
//!
//! Built on `logos`. Literals are cooked (escapes resolved, numbers parsed)
//! while lexing, so the parser only ever sees finished values. Newlines are
//! real tokens because they separate statements.

mod cook;
mod error;
mod token;

use logos::Logos;

pub use error::{LexError, LexErrorKind};
pub use token::Token;

/// Byte range of a token in its source.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`.
    pub fn point(offset: usize) -> Self {
        Span::new(offset, offset)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// A token and where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}

/// Tokenize `source`, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(token) => tokens.push(Spanned { token, span }),
            Err(kind) => return Err(LexError::new(refine(kind, &source[span.start..]), span)),
        }
    }

    Ok(tokens)
}

/// Unterminated literals fall out of logos as generic errors; name them.
fn refine(kind: LexErrorKind, rest: &str) -> LexErrorKind {
    match (kind, rest.chars().next()) {
        (LexErrorKind::UnexpectedInput, Some('"')) => LexErrorKind::UnterminatedString,
        (LexErrorKind::UnexpectedInput, Some('\'')) => LexErrorKind::UnterminatedChar,
        (LexErrorKind::UnexpectedInput, Some(c)) => LexErrorKind::UnknownCharacter(c),
        (kind, _) => kind,
    }
}
