//! The Song expression: syntax tree and runtime value in one type.
//!
//! Literals, lists, closures and built-ins are *values*: evaluating them
//! yields themselves (lists evaluate their elements). Names, calls, scopes
//! and declarations are *forms* that evaluation reduces to values.
//! `TailEval` is never produced by the parser; the evaluator uses it to
//! defer a call in tail position to the trampoline.
//!
//! Recursive payloads sit behind [`Heap`], so cloning any expression is
//! cheap and sharing a subtree never copies it.

use std::fmt;

use crate::{BuiltIn, Context, Heap, Name, Number};

/// A Song expression or value.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    // Literals
    Bool(bool),
    Number(Number),
    Char(char),
    /// Ordered items; a list of chars doubles as a string.
    List(Heap<Vec<Expression>>),

    // Patterns and list construction
    /// `[h1, h2 | tail]`: builds a list when evaluated, destructures as a pattern.
    Cons {
        heads: Heap<Vec<Expression>>,
        tail: Heap<Expression>,
    },
    /// `_`: matches anything, binds nothing.
    Ignore,
    /// A variable reference, or a binder in pattern position.
    Name(Name),

    // Declarations
    /// One clause of a (possibly multi-clause) function declaration.
    Function(Heap<Function>),
    /// `variable = value`.
    Assign {
        variable: Heap<Expression>,
        value: Heap<Expression>,
    },
    /// The evaluated form of a function declaration.
    Closure(Heap<Closure>),

    // Control
    /// `Do s1, s2, ... End`: sequential block, the last statement is the result.
    Scope(Heap<Vec<Expression>>),
    /// Call by name, resolved through the context.
    Call {
        name: Name,
        args: Heap<Vec<Expression>>,
    },
    /// Call against an expression that evaluates to a closure or built-in.
    Eval {
        target: Heap<Expression>,
        args: Heap<Vec<Expression>>,
    },
    /// Deferred tail call: `target` is a closure, `args` are evaluated values.
    TailEval {
        target: Heap<Expression>,
        args: Heap<Vec<Expression>>,
    },
    /// A reference to a native operator.
    BuiltIn(BuiltIn),
}

impl Expression {
    // Factory methods

    #[inline]
    pub fn int(i: i64) -> Self {
        Expression::Number(Number::Int(i))
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Expression::Number(Number::Float(f))
    }

    pub fn list(items: Vec<Expression>) -> Self {
        Expression::List(Heap::new(items))
    }

    pub fn empty_list() -> Self {
        Expression::list(Vec::new())
    }

    /// A string: a list of chars.
    pub fn string(s: &str) -> Self {
        Expression::list(s.chars().map(Expression::Char).collect())
    }

    pub fn cons(heads: Vec<Expression>, tail: Expression) -> Self {
        Expression::Cons {
            heads: Heap::new(heads),
            tail: Heap::new(tail),
        }
    }

    pub fn name(name: impl Into<Name>) -> Self {
        Expression::Name(name.into())
    }

    pub fn function(function: Function) -> Self {
        Expression::Function(Heap::new(function))
    }

    pub fn assign(variable: Expression, value: Expression) -> Self {
        Expression::Assign {
            variable: Heap::new(variable),
            value: Heap::new(value),
        }
    }

    pub fn closure(closure: Closure) -> Self {
        Expression::Closure(Heap::new(closure))
    }

    pub fn scope(statements: Vec<Expression>) -> Self {
        Expression::Scope(Heap::new(statements))
    }

    pub fn call(name: impl Into<Name>, args: Vec<Expression>) -> Self {
        Expression::Call {
            name: name.into(),
            args: Heap::new(args),
        }
    }

    pub fn eval(target: Expression, args: Vec<Expression>) -> Self {
        Expression::Eval {
            target: Heap::new(target),
            args: Heap::new(args),
        }
    }

    pub fn tail_eval(target: Expression, args: Vec<Expression>) -> Self {
        Expression::TailEval {
            target: Heap::new(target),
            args: Heap::new(args),
        }
    }

    // Queries

    /// The items of a list value.
    #[inline]
    pub fn as_list(&self) -> Option<&[Expression]> {
        match self {
            Expression::List(items) => Some(items),
            _ => None,
        }
    }

    /// The text of a list made only of chars (the empty list is `""`).
    pub fn as_string(&self) -> Option<String> {
        self.as_list()?
            .iter()
            .map(|item| match item {
                Expression::Char(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Whether this expression can be called.
    pub fn is_callable(&self) -> bool {
        matches!(self, Expression::Closure(_) | Expression::BuiltIn(_))
    }
}

impl From<Number> for Expression {
    fn from(n: Number) -> Self {
        Expression::Number(n)
    }
}

impl From<bool> for Expression {
    fn from(b: bool) -> Self {
        Expression::Bool(b)
    }
}

/// One clause of a function: parameter patterns, guard and body.
///
/// Created by the parser and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    /// Absent for lambdas.
    pub name: Option<Name>,
    pub patterns: Vec<Expression>,
    /// Defaults to the literal `true`.
    pub guard: Expression,
    pub body: Expression,
}

impl Function {
    pub fn new(
        name: Option<Name>,
        patterns: Vec<Expression>,
        guard: Option<Expression>,
        body: Expression,
    ) -> Self {
        Function {
            name,
            patterns,
            guard: guard.unwrap_or(Expression::Bool(true)),
            body,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the guard is anything other than the default `true`.
    #[inline]
    pub fn has_guard(&self) -> bool {
        self.guard != Expression::Bool(true)
    }
}

/// A callable value: clauses tried in declaration order, plus the context
/// captured when the first clause was declared.
#[derive(Clone, PartialEq)]
pub struct Closure {
    pub name: Option<Name>,
    pub clauses: Vec<Heap<Function>>,
    pub captured: Context,
}

impl Closure {
    pub fn new(name: Option<Name>, clause: Heap<Function>, captured: Context) -> Self {
        Closure {
            name,
            clauses: vec![clause],
            captured,
        }
    }

    /// A copy with `clause` tried after the existing ones. The captured
    /// context of the first declaration is kept.
    #[must_use]
    pub fn with_clause(&self, clause: Heap<Function>) -> Self {
        let mut clauses = self.clauses.clone();
        clauses.push(clause);
        Closure {
            name: self.name.clone(),
            clauses,
            captured: self.captured.clone(),
        }
    }

    /// Whether any clause takes `count` arguments.
    pub fn accepts_arity(&self, count: usize) -> bool {
        self.clauses.iter().any(|clause| clause.arity() == count)
    }
}

impl fmt::Debug for Closure {
    // The captured context is omitted: it usually holds the whole prelude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("name", &self.name)
            .field("clauses", &self.clauses)
            .field("captured", &format_args!("<{} bindings>", self.captured.len()))
            .finish()
    }
}

// Display

fn write_separated(f: &mut fmt::Formatter<'_>, items: &[Expression]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_escaped(f: &mut fmt::Formatter<'_>, c: char, quote: char) -> fmt::Result {
    match c {
        '\n' => f.write_str("\\n"),
        '\t' => f.write_str("\\t"),
        '\r' => f.write_str("\\r"),
        '\0' => f.write_str("\\0"),
        '\\' => f.write_str("\\\\"),
        c if c == quote => write!(f, "\\{c}"),
        c => write!(f, "{c}"),
    }
}

fn is_infix_call(expr: &Expression) -> bool {
    match expr {
        Expression::Call { name, args } => args.len() == 2 && is_infix_name(name),
        _ => false,
    }
}

fn is_infix_name(name: &Name) -> bool {
    BuiltIn::from_token(name.as_str()).is_some_and(BuiltIn::is_infix)
}

/// Operand of an operator, parenthesized when it is itself an infix call.
struct Operand<'a>(&'a Expression);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_infix_call(self.0) {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Bool(b) => write!(f, "{b}"),
            Expression::Number(n) => write!(f, "{n}"),
            Expression::Char(c) => {
                f.write_str("'")?;
                write_escaped(f, *c, '\'')?;
                f.write_str("'")
            }
            Expression::List(items) => match self.as_string() {
                Some(text) if !items.is_empty() => {
                    f.write_str("\"")?;
                    for c in text.chars() {
                        write_escaped(f, c, '"')?;
                    }
                    f.write_str("\"")
                }
                _ => {
                    f.write_str("[")?;
                    write_separated(f, items)?;
                    f.write_str("]")
                }
            },
            Expression::Cons { heads, tail } => {
                f.write_str("[")?;
                write_separated(f, heads)?;
                write!(f, "|{tail}]")
            }
            Expression::Ignore => f.write_str("_"),
            Expression::Name(name) => write!(f, "{name}"),
            Expression::Function(function) => write!(f, "{function}"),
            Expression::Assign { variable, value } => write!(f, "{variable} = {value}"),
            Expression::Closure(closure) => match &closure.name {
                Some(name) => write!(f, "<function {name}>"),
                None => f.write_str("<lambda>"),
            },
            Expression::Scope(statements) => {
                f.write_str("Do ")?;
                write_separated(f, statements)?;
                f.write_str(" End")
            }
            Expression::Call { name, args } => match args.as_slice() {
                [lhs, rhs] if is_infix_name(name) => {
                    write!(f, "{} {name} {}", Operand(lhs), Operand(rhs))
                }
                [operand] if name.as_str() == "-" => write!(f, "-{}", Operand(operand)),
                [operand] if name.as_str() == "Not" => write!(f, "Not {}", Operand(operand)),
                _ => {
                    write!(f, "{name}(")?;
                    write_separated(f, args)?;
                    f.write_str(")")
                }
            },
            Expression::Eval { target, args } | Expression::TailEval { target, args } => {
                write!(f, "({target})(")?;
                write_separated(f, args)?;
                f.write_str(")")
            }
            Expression::BuiltIn(builtin) => write!(f, "{builtin}"),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}(")?,
            None => f.write_str("Fn(")?,
        }
        write_separated(f, &self.patterns)?;
        f.write_str(")")?;
        if self.has_guard() {
            write!(f, " When {}", self.guard)?;
        }
        write!(f, " = {}", self.body)
    }
}
