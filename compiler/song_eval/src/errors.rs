//! Evaluation errors and their constructors.
//!
//! Call sites never build [`EvaluationError`] variants by hand; they use the
//! `#[cold]` constructors below, which keeps the hot paths small and the
//! messages in one place.

use std::fmt::Write as _;
use std::mem;

use song_ir::{Expression, Name, NumericError};
use thiserror::Error;

pub type EvalResult<T = Expression> = Result<T, EvaluationError>;

/// Why an evaluation failed.
///
/// Every kind except [`SignatureMismatch`](EvaluationError::SignatureMismatch)
/// is fatal. As an error unwinds through enclosing expressions it is wrapped
/// in [`CannotEvaluate`](EvaluationError::CannotEvaluate) once per level,
/// which [`EvaluationError::trace`] renders as an indented chain.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvaluationError {
    #[error("unknown symbol: {0}")]
    SymbolNotFound(Name),
    /// No clause accepts the arguments (or a built-in got the wrong count).
    #[error("no clause matches ({})", comma_separated(.0))]
    SignatureMismatch(Vec<Expression>),
    #[error("not a closure: {0}")]
    NotAClosure(Expression),
    #[error("not a boolean: {0}")]
    NotABoolean(Expression),
    #[error("not a number: {0}")]
    NotANumber(Expression),
    #[error("not a character: {0}")]
    NotACharacter(Expression),
    #[error("not a list: {0}")]
    NotAList(Expression),
    #[error("not a function: {0}")]
    NotAFunction(Expression),
    #[error("patterns cannot be floats: {0}")]
    PatternsCannotBeFloats(Expression),
    #[error("numeric mismatch: integer operation on a float")]
    NumericMismatch,
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {0}")]
    IntegerOverflow(&'static str),
    #[error("empty scope")]
    EmptyScope,
    #[error("cannot compare {0} and {1}")]
    CannotCompare(Expression, Expression),
    #[error("i/o error: {0}")]
    Io(String),
    #[error("{0}")]
    CannotEvaluate(Expression, #[source] Box<EvaluationError>),
}

fn comma_separated(items: &[Expression]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl EvaluationError {
    /// Whether this is a recoverable clause-selection failure.
    #[inline]
    pub fn is_signature_mismatch(&self) -> bool {
        matches!(self, EvaluationError::SignatureMismatch(_))
    }

    /// Whether an overloaded built-in may try its next operand interpretation.
    #[inline]
    pub(crate) fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            EvaluationError::NotABoolean(_)
                | EvaluationError::NotANumber(_)
                | EvaluationError::NotACharacter(_)
                | EvaluationError::NotAList(_)
        )
    }

    /// The innermost error under all `CannotEvaluate` wrappers.
    pub fn root_cause(&self) -> &EvaluationError {
        let mut current = self;
        while let EvaluationError::CannotEvaluate(_, inner) = current {
            current = inner;
        }
        current
    }

    /// Render the wrapper chain, one line per level:
    ///
    /// ```text
    /// Evaluation error
    ///  ↳ foo
    ///   ↳ bar
    ///    💥  unknown symbol: baz
    /// ```
    pub fn trace(&self) -> String {
        let mut out = String::from("Evaluation error");
        let mut depth = 1;
        let mut current = self;
        while let EvaluationError::CannotEvaluate(expr, inner) = current {
            let _ = write!(out, "\n{:depth$}↳ {expr}", "");
            depth += 1;
            current = inner;
        }
        let _ = write!(out, "\n{:depth$}💥  {current}", "");
        out
    }
}

/// Deep non-tail recursion that fails at the bottom leaves one wrapper per
/// level. Unlink the chain iteratively so dropping it never recurses.
impl Drop for EvaluationError {
    fn drop(&mut self) {
        let EvaluationError::CannotEvaluate(_, inner) = self else {
            return;
        };
        let mut next = mem::replace(&mut **inner, EvaluationError::EmptyScope);
        while let EvaluationError::CannotEvaluate(_, inner) = &mut next {
            next = mem::replace(&mut **inner, EvaluationError::EmptyScope);
        }
    }
}

impl From<NumericError> for EvaluationError {
    #[cold]
    fn from(err: NumericError) -> Self {
        match err {
            NumericError::NumericMismatch => EvaluationError::NumericMismatch,
            NumericError::DivisionByZero => EvaluationError::DivisionByZero,
            NumericError::Overflow(op) => EvaluationError::IntegerOverflow(op),
        }
    }
}

// Lookup and dispatch

#[cold]
pub fn symbol_not_found(name: &Name) -> EvaluationError {
    EvaluationError::SymbolNotFound(name.clone())
}

#[cold]
pub fn signature_mismatch(args: &[Expression]) -> EvaluationError {
    EvaluationError::SignatureMismatch(args.to_vec())
}

#[cold]
pub fn not_a_closure(value: &Expression) -> EvaluationError {
    EvaluationError::NotAClosure(value.clone())
}

#[cold]
pub fn not_a_function(value: &Expression) -> EvaluationError {
    EvaluationError::NotAFunction(value.clone())
}

#[cold]
pub fn patterns_cannot_be_floats(pattern: &Expression) -> EvaluationError {
    EvaluationError::PatternsCannotBeFloats(pattern.clone())
}

#[cold]
pub fn empty_scope() -> EvaluationError {
    EvaluationError::EmptyScope
}

// Operand types

#[cold]
pub fn not_a_boolean(value: &Expression) -> EvaluationError {
    EvaluationError::NotABoolean(value.clone())
}

#[cold]
pub fn not_a_number(value: &Expression) -> EvaluationError {
    EvaluationError::NotANumber(value.clone())
}

#[cold]
pub fn not_a_character(value: &Expression) -> EvaluationError {
    EvaluationError::NotACharacter(value.clone())
}

#[cold]
pub fn not_a_list(value: &Expression) -> EvaluationError {
    EvaluationError::NotAList(value.clone())
}

#[cold]
pub fn cannot_compare(lhs: &Expression, rhs: &Expression) -> EvaluationError {
    EvaluationError::CannotCompare(lhs.clone(), rhs.clone())
}

// Arithmetic

#[cold]
pub fn numeric_mismatch() -> EvaluationError {
    EvaluationError::NumericMismatch
}

#[cold]
pub fn division_by_zero() -> EvaluationError {
    EvaluationError::DivisionByZero
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvaluationError {
    EvaluationError::IntegerOverflow(operation)
}

// Streams

#[cold]
pub fn io_error(err: &std::io::Error) -> EvaluationError {
    EvaluationError::Io(err.to_string())
}

// Wrapping

#[cold]
pub fn cannot_evaluate(expr: &Expression, inner: EvaluationError) -> EvaluationError {
    EvaluationError::CannotEvaluate(expr.clone(), Box::new(inner))
}
