//! The built-in operator registry.
//!
//! Built-ins receive their arguments unevaluated, together with the calling
//! context, so the arity check happens before anything is evaluated and
//! `And`/`Or` can short-circuit. Everything else evaluates all arguments
//! left to right and then dispatches on the values.

mod arithmetic;
mod compare;
mod convert;
mod io;

use song_ir::{BuiltIn, Context, Expression, Number};

use crate::errors::{
    not_a_boolean, not_a_character, not_a_list, not_a_number, signature_mismatch, EvalResult,
};
use crate::Evaluator;

/// A context holding every built-in under its token and aliases.
pub fn initial_context() -> Context {
    BuiltIn::ALL
        .into_iter()
        .flat_map(|builtin| {
            std::iter::once(builtin.token())
                .chain(builtin.aliases().iter().copied())
                .map(move |token| (token.into(), Expression::BuiltIn(builtin)))
        })
        .collect()
}

/// Inclusive bounds on the argument count.
fn arity(builtin: BuiltIn) -> (usize, usize) {
    match builtin {
        BuiltIn::Minus => (1, 2),
        BuiltIn::In => (0, 1),
        BuiltIn::Not
        | BuiltIn::ToNumber
        | BuiltIn::ToString
        | BuiltIn::ToCharacter
        | BuiltIn::ToScalar
        | BuiltIn::Truncate
        | BuiltIn::Sin
        | BuiltIn::Cos
        | BuiltIn::Tan
        | BuiltIn::ArcSin
        | BuiltIn::ArcCos
        | BuiltIn::ArcTan
        | BuiltIn::Log
        | BuiltIn::Log2
        | BuiltIn::Ln
        | BuiltIn::Out
        | BuiltIn::Err => (1, 1),
        BuiltIn::Plus
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
        | BuiltIn::Or => (2, 2),
    }
}

/// Call `builtin` with unevaluated `args`.
pub(crate) fn apply(
    evaluator: &Evaluator,
    builtin: BuiltIn,
    args: &[Expression],
    context: &Context,
) -> EvalResult {
    let (min, max) = arity(builtin);
    if args.len() < min || args.len() > max {
        return Err(signature_mismatch(args));
    }

    match (builtin, args) {
        (BuiltIn::And, [lhs, rhs]) => {
            if !as_bool(&evaluator.evaluate(lhs, context)?)? {
                return Ok(Expression::Bool(false));
            }
            Ok(Expression::Bool(as_bool(&evaluator.evaluate(rhs, context)?)?))
        }
        (BuiltIn::Or, [lhs, rhs]) => {
            if as_bool(&evaluator.evaluate(lhs, context)?)? {
                return Ok(Expression::Bool(true));
            }
            Ok(Expression::Bool(as_bool(&evaluator.evaluate(rhs, context)?)?))
        }
        _ => {
            let values = evaluator.evaluate_all(args, context)?;
            apply_values(evaluator, builtin, &values)
        }
    }
}

fn apply_values(evaluator: &Evaluator, builtin: BuiltIn, values: &[Expression]) -> EvalResult {
    match (builtin, values) {
        (BuiltIn::Plus, [a, b]) => arithmetic::plus(a, b),
        (BuiltIn::Minus, [a]) => arithmetic::unary(a, Number::negate),
        (BuiltIn::Minus, [a, b]) => arithmetic::binary(a, b, Number::minus),
        (BuiltIn::Times, [a, b]) => arithmetic::binary(a, b, Number::times),
        (BuiltIn::Divide, [a, b]) => arithmetic::binary(a, b, Number::float_divided_by),
        (BuiltIn::Remainder, [a, b]) => arithmetic::binary(a, b, Number::remainder),
        (BuiltIn::IntegerDivide, [a, b]) => arithmetic::binary(a, b, Number::integer_divided_by),
        (BuiltIn::Modulo, [a, b]) => arithmetic::binary(a, b, Number::modulo),
        (BuiltIn::Power, [a, b]) => arithmetic::binary(a, b, Number::power),

        (BuiltIn::Less, [a, b]) => compare::order(a, b, std::cmp::Ordering::is_lt),
        (BuiltIn::Greater, [a, b]) => compare::order(a, b, std::cmp::Ordering::is_gt),
        (BuiltIn::LessOrEqual, [a, b]) => compare::order(a, b, std::cmp::Ordering::is_le),
        (BuiltIn::GreaterOrEqual, [a, b]) => compare::order(a, b, std::cmp::Ordering::is_ge),
        (BuiltIn::Equal, [a, b]) => compare::equal(a, b).map(Expression::Bool),
        (BuiltIn::NotEqual, [a, b]) => compare::equal(a, b).map(|eq| Expression::Bool(!eq)),
        (BuiltIn::Not, [a]) => Ok(Expression::Bool(!as_bool(a)?)),

        (BuiltIn::ToNumber, [a]) => convert::to_number(a),
        (BuiltIn::ToString, [a]) => Ok(convert::to_string(a)),
        (BuiltIn::ToCharacter, [a]) => convert::to_character(a),
        (BuiltIn::ToScalar, [a]) => convert::to_scalar(a),
        (BuiltIn::Truncate, [a]) => Ok(Expression::Number(as_number(a)?.truncate())),

        (BuiltIn::Sin, [a]) => arithmetic::float_function(a, f64::sin),
        (BuiltIn::Cos, [a]) => arithmetic::float_function(a, f64::cos),
        (BuiltIn::Tan, [a]) => arithmetic::float_function(a, f64::tan),
        (BuiltIn::ArcSin, [a]) => arithmetic::float_function(a, f64::asin),
        (BuiltIn::ArcCos, [a]) => arithmetic::float_function(a, f64::acos),
        (BuiltIn::ArcTan, [a]) => arithmetic::float_function(a, f64::atan),
        (BuiltIn::Log, [a]) => arithmetic::float_function(a, f64::log10),
        (BuiltIn::Log2, [a]) => arithmetic::float_function(a, f64::log2),
        (BuiltIn::Ln, [a]) => arithmetic::float_function(a, f64::ln),

        (BuiltIn::In, []) => io::read(evaluator.streams(), None),
        (BuiltIn::In, [prompt]) => io::read(evaluator.streams(), Some(prompt)),
        (BuiltIn::Out, [a]) => io::write_out(evaluator.streams(), a),
        (BuiltIn::Err, [a]) => io::write_err(evaluator.streams(), a),

        _ => Err(signature_mismatch(values)),
    }
}

// Operand accessors

pub(crate) fn as_bool(value: &Expression) -> EvalResult<bool> {
    match value {
        Expression::Bool(b) => Ok(*b),
        other => Err(not_a_boolean(other)),
    }
}

pub(crate) fn as_number(value: &Expression) -> EvalResult<Number> {
    match value {
        Expression::Number(n) => Ok(*n),
        other => Err(not_a_number(other)),
    }
}

pub(crate) fn as_char(value: &Expression) -> EvalResult<char> {
    match value {
        Expression::Char(c) => Ok(*c),
        other => Err(not_a_character(other)),
    }
}

pub(crate) fn as_list(value: &Expression) -> EvalResult<&[Expression]> {
    value.as_list().ok_or_else(|| not_a_list(value))
}

/// Text written by `out`/`err` and produced by `string`: strings raw,
/// everything else rendered as source.
pub(crate) fn text_of(value: &Expression) -> String {
    value.as_string().unwrap_or_else(|| value.to_string())
}
