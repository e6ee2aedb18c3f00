//! Statements, declarations and `Do … End` blocks.

use song_ir::{Expression, Function};
use song_lexer::{Span, Token};

use crate::{ParseError, ParseErrorKind, ParseResult, Parser};

impl Parser {
    /// `expr [When guard] [= expr]`.
    pub(crate) fn statement(&mut self) -> ParseResult {
        let start = self.cursor.current_span();
        let lhs = self.expression()?;
        let guard = self.guard()?;
        if self.cursor.eat(&Token::Assign) {
            self.cursor.skip_newlines();
            let rhs = self.expression()?;
            return Parser::declaration(lhs, guard, rhs, start);
        }
        match guard {
            None => Ok(lhs),
            Some(_) => Err(self.cursor.unexpected("`=` after the guard")),
        }
    }

    /// Classify `lhs = rhs` by the shape of its left side.
    fn declaration(
        lhs: Expression,
        guard: Option<Expression>,
        rhs: Expression,
        span: Span,
    ) -> ParseResult {
        match lhs {
            Expression::Call { name, args } => {
                let patterns = args
                    .iter()
                    .cloned()
                    .map(|arg| Parser::pattern(arg, span))
                    .collect::<ParseResult<Vec<_>>>()?;
                Ok(Expression::function(Function::new(
                    Some(name),
                    patterns,
                    guard,
                    rhs,
                )))
            }
            _ if guard.is_some() => Err(ParseError::new(
                ParseErrorKind::InvalidDeclaration,
                "only function declarations take a `When` guard",
                span,
            )),
            Expression::Name(_) => Ok(Expression::assign(lhs, rhs)),
            Expression::List(_) | Expression::Cons { .. } | Expression::Ignore => {
                Ok(Expression::assign(Parser::pattern(lhs, span)?, rhs))
            }
            other => Err(ParseError::new(
                ParseErrorKind::InvalidDeclaration,
                format!("cannot assign to `{other}`"),
                span,
            )),
        }
    }

    /// Statements up to `End`, separated by newlines or commas. `Do` is already consumed.
    pub(crate) fn block(&mut self) -> ParseResult {
        let mut statements = Vec::new();
        self.cursor.skip_newlines();
        while !self.cursor.eat(&Token::End) {
            statements.push(self.statement()?);
            let mut separated = false;
            while self.cursor.eat(&Token::Newline) || self.cursor.eat(&Token::Comma) {
                separated = true;
            }
            if self.cursor.eat(&Token::End) {
                break;
            }
            if !separated {
                return Err(self.cursor.unexpected("`,`, a new line or `End`"));
            }
        }
        Ok(Expression::scope(statements))
    }
}
