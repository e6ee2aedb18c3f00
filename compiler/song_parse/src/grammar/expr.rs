//! Expression parsing.
//!
//! Precedence chain, lowest to highest:
//! `Or` < `And` < `Eq Neq` < `< > <= >=` < `+ -` < `* / % Div Mod` < `^` < unary < postfix.

use song_ir::{Expression, Function};
use song_lexer::Token;
use song_stack::ensure_sufficient_stack;

use crate::{ParseResult, Parser};

type Operand = fn(&mut Parser) -> ParseResult;

impl Parser {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input grows the stack
    /// instead of overflowing it.
    pub(crate) fn expression(&mut self) -> ParseResult {
        ensure_sufficient_stack(|| self.or_expr())
    }

    /// One left-associative binary level. Newlines after an operator continue the line.
    fn left_assoc(&mut self, operators: &[Token], operand: Operand) -> ParseResult {
        let mut left = operand(self)?;
        while let Some(op) = self
            .cursor
            .current()
            .filter(|t| operators.contains(*t))
            .and_then(Token::operator_name)
        {
            self.cursor.advance();
            self.cursor.skip_newlines();
            let right = operand(self)?;
            left = Expression::call(op, vec![left, right]);
        }
        Ok(left)
    }

    fn or_expr(&mut self) -> ParseResult {
        self.left_assoc(&[Token::Or], Parser::and_expr)
    }

    fn and_expr(&mut self) -> ParseResult {
        self.left_assoc(&[Token::And], Parser::equality_expr)
    }

    fn equality_expr(&mut self) -> ParseResult {
        self.left_assoc(&[Token::Eq, Token::Neq], Parser::comparison_expr)
    }

    fn comparison_expr(&mut self) -> ParseResult {
        self.left_assoc(
            &[Token::Lt, Token::Gt, Token::LtEq, Token::GtEq],
            Parser::additive_expr,
        )
    }

    fn additive_expr(&mut self) -> ParseResult {
        self.left_assoc(&[Token::Plus, Token::Minus], Parser::term_expr)
    }

    fn term_expr(&mut self) -> ParseResult {
        self.left_assoc(
            &[
                Token::Star,
                Token::Slash,
                Token::Percent,
                Token::Div,
                Token::Mod,
            ],
            Parser::power_expr,
        )
    }

    /// `^` is right-associative.
    fn power_expr(&mut self) -> ParseResult {
        let base = self.unary_expr()?;
        if self.cursor.eat(&Token::Caret) {
            self.cursor.skip_newlines();
            let exponent = ensure_sufficient_stack(|| self.power_expr())?;
            return Ok(Expression::call("^", vec![base, exponent]));
        }
        Ok(base)
    }

    fn unary_expr(&mut self) -> ParseResult {
        // `-(a, b)` and `Not(x)` are ordinary operator calls.
        if matches!(self.cursor.current(), Some(Token::Minus | Token::Not))
            && self.cursor.next_is_lparen()
        {
            return self.postfix_expr();
        }
        match self.cursor.current() {
            Some(Token::Minus) => {
                self.cursor.advance();
                match self.cursor.current() {
                    Some(&Token::Int(i)) => {
                        self.cursor.advance();
                        self.postfix_ops(Expression::int(-i))
                    }
                    Some(&Token::Float(x)) => {
                        self.cursor.advance();
                        self.postfix_ops(Expression::float(-x))
                    }
                    _ => {
                        let operand = ensure_sufficient_stack(|| self.unary_expr())?;
                        Ok(Expression::call("-", vec![operand]))
                    }
                }
            }
            Some(Token::Not) => {
                self.cursor.advance();
                let operand = ensure_sufficient_stack(|| self.unary_expr())?;
                Ok(Expression::call("Not", vec![operand]))
            }
            _ => self.postfix_expr(),
        }
    }

    fn postfix_expr(&mut self) -> ParseResult {
        let primary = self.primary_expr()?;
        self.postfix_ops(primary)
    }

    /// Trailing `(args)` and `.name[(args)]`.
    fn postfix_ops(&mut self, mut expr: Expression) -> ParseResult {
        loop {
            if self.cursor.eat(&Token::LParen) {
                let args = self.arguments()?;
                expr = Expression::eval(expr, args);
            } else if self.cursor.eat(&Token::Dot) {
                let method = self.ident("a method name after `.`")?;
                let mut args = vec![expr];
                if self.cursor.eat(&Token::LParen) {
                    args.extend(self.arguments()?);
                }
                expr = Expression::call(method, args);
            } else {
                return Ok(expr);
            }
        }
    }

    /// Comma-separated expressions up to `)`; the `(` is already consumed.
    pub(crate) fn arguments(&mut self) -> ParseResult<Vec<Expression>> {
        self.delimited(&Token::RParen)
    }

    fn delimited(&mut self, close: &Token) -> ParseResult<Vec<Expression>> {
        let mut items = Vec::new();
        self.cursor.skip_newlines();
        if self.cursor.eat(close) {
            return Ok(items);
        }
        loop {
            items.push(self.expression()?);
            self.cursor.skip_newlines();
            if !self.cursor.eat(&Token::Comma) {
                break;
            }
            self.cursor.skip_newlines();
        }
        self.cursor.expect(close)?;
        Ok(items)
    }

    pub(crate) fn ident(&mut self, expected: &str) -> ParseResult<String> {
        match self.cursor.current() {
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.cursor.advance();
                Ok(name)
            }
            _ => Err(self.cursor.unexpected(expected)),
        }
    }

    fn primary_expr(&mut self) -> ParseResult {
        // Operator token used as a function name: `+(1, 2)`, `Eq(a, b)`.
        if let Some(op) = self.cursor.current().and_then(Token::operator_name) {
            if self.cursor.next_is_lparen() {
                self.cursor.advance();
                self.cursor.advance();
                let args = self.arguments()?;
                return Ok(Expression::call(op, args));
            }
        }

        let Some(token) = self.cursor.current().cloned() else {
            return Err(self.cursor.unexpected("an expression"));
        };
        match token {
            Token::Int(i) => {
                self.cursor.advance();
                Ok(Expression::int(i))
            }
            Token::Float(x) => {
                self.cursor.advance();
                Ok(Expression::float(x))
            }
            Token::Char(c) => {
                self.cursor.advance();
                Ok(Expression::Char(c))
            }
            Token::Str(s) => {
                self.cursor.advance();
                Ok(Expression::string(&s))
            }
            Token::True => {
                self.cursor.advance();
                Ok(Expression::Bool(true))
            }
            Token::False => {
                self.cursor.advance();
                Ok(Expression::Bool(false))
            }
            Token::Underscore => {
                self.cursor.advance();
                Ok(Expression::Ignore)
            }
            Token::Ident(name) => {
                self.cursor.advance();
                if self.cursor.eat(&Token::LParen) {
                    let args = self.arguments()?;
                    return Ok(Expression::call(name, args));
                }
                Ok(Expression::name(name))
            }
            Token::LBracket => {
                self.cursor.advance();
                self.list_literal()
            }
            Token::LParen => {
                self.cursor.advance();
                self.cursor.skip_newlines();
                let inner = self.expression()?;
                self.cursor.skip_newlines();
                self.cursor.expect(&Token::RParen)?;
                Ok(inner)
            }
            Token::Do => {
                self.cursor.advance();
                self.block()
            }
            Token::Fn => {
                self.cursor.advance();
                self.lambda()
            }
            _ => Err(self.cursor.unexpected("an expression")),
        }
    }

    /// `[a, b]` or `[a, b | rest]`; the `[` is already consumed.
    fn list_literal(&mut self) -> ParseResult {
        let mut heads = Vec::new();
        self.cursor.skip_newlines();
        if self.cursor.eat(&Token::RBracket) {
            return Ok(Expression::empty_list());
        }
        loop {
            heads.push(self.expression()?);
            self.cursor.skip_newlines();
            if self.cursor.eat(&Token::Pipe) {
                self.cursor.skip_newlines();
                let tail = self.expression()?;
                self.cursor.skip_newlines();
                self.cursor.expect(&Token::RBracket)?;
                return Ok(Expression::cons(heads, tail));
            }
            if !self.cursor.eat(&Token::Comma) {
                break;
            }
            self.cursor.skip_newlines();
        }
        self.cursor.expect(&Token::RBracket)?;
        Ok(Expression::list(heads))
    }

    /// `Fn(patterns) [When guard] = body`; `Fn` is already consumed.
    fn lambda(&mut self) -> ParseResult {
        self.cursor.expect(&Token::LParen)?;
        let start = self.cursor.current_span();
        let patterns = self
            .arguments()?
            .into_iter()
            .map(|arg| Parser::pattern(arg, start))
            .collect::<ParseResult<Vec<_>>>()?;
        let guard = self.guard()?;
        self.cursor.expect(&Token::Assign)?;
        self.cursor.skip_newlines();
        let body = self.expression()?;
        Ok(Expression::function(Function::new(
            None, patterns, guard, body,
        )))
    }

    /// Optional `When expr`.
    pub(crate) fn guard(&mut self) -> ParseResult<Option<Expression>> {
        if self.cursor.eat(&Token::When) {
            self.cursor.skip_newlines();
            return Ok(Some(self.expression()?));
        }
        Ok(None)
    }
}
