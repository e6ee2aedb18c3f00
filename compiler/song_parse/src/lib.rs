//! Recursive descent parser for Song.
//!
//! Turns source text into [`Expression`] statements. Operators desugar into
//! calls of their built-in tokens (`a + b` is `call("+", [a, b])`), method
//! syntax desugars into leading-argument calls (`x.f(a)` is
//! `call("f", [x, a])`), and declarations become `function` or `assign`
//! expressions. Evaluation-only variants (closures, built-ins, tail calls)
//! are never produced.

mod cursor;
mod error;
mod grammar;

use song_ir::Expression;
use song_lexer::{tokenize, Token};

use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

pub type ParseResult<T = Expression> = Result<T, ParseError>;

/// Parser state.
pub(crate) struct Parser {
    cursor: Cursor,
}

impl Parser {
    fn new(source: &str) -> ParseResult<Self> {
        let tokens = tokenize(source)?;
        Ok(Parser {
            cursor: Cursor::new(tokens, source.len()),
        })
    }

    /// Statements separated by newlines, up to the end of input.
    fn program(&mut self) -> ParseResult<Vec<Expression>> {
        let mut statements = Vec::new();
        self.cursor.skip_newlines();
        while !self.cursor.is_at_end() {
            statements.push(self.statement()?);
            if !self.cursor.is_at_end() {
                self.cursor.expect(&Token::Newline)?;
                self.cursor.skip_newlines();
            }
        }
        Ok(statements)
    }
}

/// Parse every top-level statement of `source`.
pub fn parse_program(source: &str) -> ParseResult<Vec<Expression>> {
    Parser::new(source)?.program()
}

/// Parse `source` as exactly one statement. Blank lines around it are allowed.
pub fn parse_statement(source: &str) -> ParseResult {
    let mut parser = Parser::new(source)?;
    parser.cursor.skip_newlines();
    let statement = parser.statement()?;
    parser.cursor.skip_newlines();
    if parser.cursor.is_at_end() {
        Ok(statement)
    } else {
        Err(parser.cursor.unexpected("end of input"))
    }
}
