//! Expression-to-pattern conversion.
//!
//! Parameters and destructuring targets are parsed as ordinary expressions
//! and then checked here: names, `_`, literals, lists and cons forms are
//! patterns, anything else is rejected.

use song_ir::Expression;
use song_lexer::Span;

use crate::{ParseError, ParseErrorKind, ParseResult, Parser};

impl Parser {
    pub(crate) fn pattern(expr: Expression, span: Span) -> ParseResult {
        match expr {
            Expression::Name(_)
            | Expression::Ignore
            | Expression::Bool(_)
            | Expression::Number(_)
            | Expression::Char(_) => Ok(expr),
            Expression::List(items) => Ok(Expression::list(Parser::patterns(&items, span)?)),
            Expression::Cons { heads, tail } => Ok(Expression::cons(
                Parser::patterns(&heads, span)?,
                Parser::pattern(Expression::clone(&tail), span)?,
            )),
            other => Err(ParseError::new(
                ParseErrorKind::InvalidPattern,
                format!("`{other}` is not a valid pattern"),
                span,
            )),
        }
    }

    fn patterns(items: &[Expression], span: Span) -> ParseResult<Vec<Expression>> {
        items
            .iter()
            .cloned()
            .map(|item| Parser::pattern(item, span))
            .collect()
    }
}
