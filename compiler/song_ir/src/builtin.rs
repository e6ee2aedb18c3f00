//! The closed table of native operator tokens.
//!
//! The token string is the contract with the parser: `a + b` and `+(a, b)`
//! both become a call to the name `"+"`, which the initial context binds to
//! `Expression::BuiltIn(BuiltIn::Plus)`. The implementations live in the
//! evaluator; this module only names them.

use std::fmt;

/// A native operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltIn {
    // Arithmetic
    Plus,
    Minus,
    Times,
    Divide,
    Remainder,
    IntegerDivide,
    Modulo,
    Power,

    // Comparison and logic
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
    Equal,
    NotEqual,
    And,
    Or,
    Not,

    // Conversions
    ToNumber,
    ToString,
    ToCharacter,
    ToScalar,
    Truncate,

    // Math
    Sin,
    Cos,
    Tan,
    ArcSin,
    ArcCos,
    ArcTan,
    Log,
    Log2,
    Ln,

    // Streams
    In,
    Out,
    Err,
}

impl BuiltIn {
    /// Every built-in, in registration order.
    pub const ALL: [BuiltIn; 34] = [
        BuiltIn::Plus,
        BuiltIn::Minus,
        BuiltIn::Times,
        BuiltIn::Divide,
        BuiltIn::Remainder,
        BuiltIn::IntegerDivide,
        BuiltIn::Modulo,
        BuiltIn::Power,
        BuiltIn::Less,
        BuiltIn::Greater,
        BuiltIn::LessOrEqual,
        BuiltIn::GreaterOrEqual,
        BuiltIn::Equal,
        BuiltIn::NotEqual,
        BuiltIn::And,
        BuiltIn::Or,
        BuiltIn::Not,
        BuiltIn::ToNumber,
        BuiltIn::ToString,
        BuiltIn::ToCharacter,
        BuiltIn::ToScalar,
        BuiltIn::Truncate,
        BuiltIn::Sin,
        BuiltIn::Cos,
        BuiltIn::Tan,
        BuiltIn::ArcSin,
        BuiltIn::ArcCos,
        BuiltIn::ArcTan,
        BuiltIn::Log,
        BuiltIn::Log2,
        BuiltIn::Ln,
        BuiltIn::In,
        BuiltIn::Out,
        BuiltIn::Err,
    ];

    /// The canonical token this built-in is registered under.
    pub fn token(self) -> &'static str {
        match self {
            BuiltIn::Plus => "+",
            BuiltIn::Minus => "-",
            BuiltIn::Times => "*",
            BuiltIn::Divide => "/",
            BuiltIn::Remainder => "%",
            BuiltIn::IntegerDivide => "Div",
            BuiltIn::Modulo => "Mod",
            BuiltIn::Power => "^",
            BuiltIn::Less => "<",
            BuiltIn::Greater => ">",
            BuiltIn::LessOrEqual => "<=",
            BuiltIn::GreaterOrEqual => ">=",
            BuiltIn::Equal => "Eq",
            BuiltIn::NotEqual => "Neq",
            BuiltIn::And => "And",
            BuiltIn::Or => "Or",
            BuiltIn::Not => "Not",
            BuiltIn::ToNumber => "number",
            BuiltIn::ToString => "string",
            BuiltIn::ToCharacter => "character",
            BuiltIn::ToScalar => "scalar",
            BuiltIn::Truncate => "truncate",
            BuiltIn::Sin => "sin",
            BuiltIn::Cos => "cos",
            BuiltIn::Tan => "tan",
            BuiltIn::ArcSin => "arcsin",
            BuiltIn::ArcCos => "arccos",
            BuiltIn::ArcTan => "arctan",
            BuiltIn::Log => "log",
            BuiltIn::Log2 => "log2",
            BuiltIn::Ln => "ln",
            BuiltIn::In => "in",
            BuiltIn::Out => "out",
            BuiltIn::Err => "err",
        }
    }

    /// Extra tokens that resolve to the same built-in.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            BuiltIn::ArcSin => &["asin"],
            BuiltIn::ArcCos => &["acos"],
            BuiltIn::ArcTan => &["atan"],
            _ => &[],
        }
    }

    /// Look a built-in up by its canonical token or an alias.
    pub fn from_token(token: &str) -> Option<BuiltIn> {
        BuiltIn::ALL
            .into_iter()
            .find(|b| b.token() == token || b.aliases().contains(&token))
    }

    /// Whether the grammar writes this operator between its operands.
    pub fn is_infix(self) -> bool {
        matches!(
            self,
            BuiltIn::Plus
                | BuiltIn::Minus
                | BuiltIn::Times
                | BuiltIn::Divide
                | BuiltIn::Remainder
                | BuiltIn::IntegerDivide
                | BuiltIn::Modulo
                | BuiltIn::Power
                | BuiltIn::Less
                | BuiltIn::Greater
                | BuiltIn::LessOrEqual
                | BuiltIn::GreaterOrEqual
                | BuiltIn::Equal
                | BuiltIn::NotEqual
                | BuiltIn::And
                | BuiltIn::Or
        )
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
