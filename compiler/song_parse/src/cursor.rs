//! Token cursor for navigating the token stream.

use std::mem::discriminant;

use song_lexer::{Span, Spanned, Token};

use crate::{ParseError, ParseErrorKind};

/// Position in a token list. Past the last token the cursor reports `None`
/// and a zero-width span at the end of the source.
pub(crate) struct Cursor {
    tokens: Vec<Spanned>,
    pos: usize,
    source_len: usize,
}

impl Cursor {
    pub(crate) fn new(tokens: Vec<Spanned>, source_len: usize) -> Self {
        Cursor {
            tokens,
            pos: 0,
            source_len,
        }
    }

    // Token access

    #[inline]
    pub(crate) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    /// The token after the current one.
    #[inline]
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1).map(|t| &t.token)
    }

    pub(crate) fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map_or(Span::point(self.source_len), |t| t.span)
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    // Lookahead

    /// Whether the current token has the same kind as `token` (payloads ignored).
    #[inline]
    pub(crate) fn check(&self, token: &Token) -> bool {
        self.current()
            .is_some_and(|t| discriminant(t) == discriminant(token))
    }

    #[inline]
    pub(crate) fn next_is_lparen(&self) -> bool {
        matches!(self.peek(), Some(Token::LParen))
    }

    // Consumption

    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|t| t.token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches.
    pub(crate) fn eat(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.unexpected(&token.to_string()))
        }
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.eat(&Token::Newline) {}
    }

    /// Error for the current position: end of input, or a wrong token.
    #[cold]
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        match self.current() {
            None => ParseError::new(
                ParseErrorKind::UnexpectedEof,
                format!("expected {expected}, found end of input"),
                self.current_span(),
            ),
            Some(found) => ParseError::new(
                ParseErrorKind::UnexpectedToken,
                format!("expected {expected}, found {found}"),
                self.current_span(),
            ),
        }
    }
}
