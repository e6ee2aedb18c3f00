use std::fmt;

use logos::Logos;

use crate::cook;
use crate::error::LexErrorKind;

/// A Song token.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexErrorKind)]
// Horizontal whitespace and `#` line comments.
#[logos(skip r"[ \t\r]+|#[^\n]*")]
pub enum Token {
    /// Statement separator.
    #[token("\n")]
    Newline,

    // Keywords
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("When")]
    When,
    #[token("Do")]
    Do,
    #[token("End")]
    End,
    #[token("Fn")]
    Fn,
    #[token("Eq")]
    Eq,
    #[token("Neq")]
    Neq,
    #[token("And")]
    And,
    #[token("Or")]
    Or,
    #[token("Not")]
    Not,
    #[token("Div")]
    Div,
    #[token("Mod")]
    Mod,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token("=")]
    Assign,
    #[token(".")]
    Dot,
    #[token("_")]
    Underscore,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,

    // Literals
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| LexErrorKind::IntOverflow))]
    Int(i64),

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", |lex| {
        lex.slice().parse::<f64>().map_err(|_| LexErrorKind::InvalidFloat)
    })]
    Float(f64),

    #[regex(r"'([^'\\\n]|\\.)*'", |lex| cook::char_literal(lex.slice()))]
    Char(char),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| cook::string_literal(lex.slice()))]
    Str(String),

    #[regex(r"[A-Za-z][A-Za-z0-9_]*|_[A-Za-z0-9_]+", |lex| lex.slice().to_owned())]
    Ident(String),
}

impl Token {
    /// The built-in token an operator or operator keyword calls.
    pub fn operator_name(&self) -> Option<&'static str> {
        Some(match self {
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::Caret => "^",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::LtEq => "<=",
            Token::GtEq => ">=",
            Token::Eq => "Eq",
            Token::Neq => "Neq",
            Token::And => "And",
            Token::Or => "Or",
            Token::Not => "Not",
            Token::Div => "Div",
            Token::Mod => "Mod",
            _ => return None,
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(op) = self.operator_name() {
            return write!(f, "`{op}`");
        }
        match self {
            Token::Newline => f.write_str("end of line"),
            Token::True => f.write_str("`true`"),
            Token::False => f.write_str("`false`"),
            Token::When => f.write_str("`When`"),
            Token::Do => f.write_str("`Do`"),
            Token::End => f.write_str("`End`"),
            Token::Fn => f.write_str("`Fn`"),
            Token::LParen => f.write_str("`(`"),
            Token::RParen => f.write_str("`)`"),
            Token::LBracket => f.write_str("`[`"),
            Token::RBracket => f.write_str("`]`"),
            Token::Comma => f.write_str("`,`"),
            Token::Pipe => f.write_str("`|`"),
            Token::Assign => f.write_str("`=`"),
            Token::Dot => f.write_str("`.`"),
            Token::Underscore => f.write_str("`_`"),
            Token::Int(i) => write!(f, "integer `{i}`"),
            Token::Float(x) => write!(f, "float `{x:?}`"),
            Token::Char(c) => write!(f, "character {c:?}"),
            Token::Str(s) => write!(f, "string {s:?}"),
            Token::Ident(name) => write!(f, "identifier `{name}`"),
            _ => f.write_str("operator"),
        }
    }
}
