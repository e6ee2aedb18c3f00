//! Structural pattern matching of clause parameters against argument values.
//!
//! Arguments are evaluated before matching, so the matcher only ever sees
//! values. A mismatch is `Ok(None)`/`Ok(false)`, leaving the dispatcher free
//! to try the next clause; only float-related violations are errors.

use rustc_hash::FxHashMap;
use song_ir::{Expression, Name, Number};

use crate::errors::{patterns_cannot_be_floats, EvalResult};

/// Names bound by one parameter list.
///
/// Also serves as the repeated-variable scratch map: a second occurrence of
/// a name must match the value bound by the first.
pub(crate) type Bindings = FxHashMap<Name, Expression>;

/// Match a whole parameter list. Arity must be equal.
pub(crate) fn bind_parameters(
    patterns: &[Expression],
    args: &[Expression],
) -> EvalResult<Option<Bindings>> {
    if patterns.len() != args.len() {
        return Ok(None);
    }
    let mut bindings = Bindings::default();
    for (pattern, arg) in patterns.iter().zip(args) {
        if !match_pattern(pattern, arg, &mut bindings)? {
            return Ok(None);
        }
    }
    Ok(Some(bindings))
}

/// Match one pattern against one value, extending `bindings`.
pub(crate) fn match_pattern(
    pattern: &Expression,
    value: &Expression,
    bindings: &mut Bindings,
) -> EvalResult<bool> {
    match pattern {
        Expression::Ignore => Ok(true),
        Expression::Name(name) => match bindings.get(name) {
            Some(previous @ Expression::Number(Number::Float(_))) => {
                Err(patterns_cannot_be_floats(previous))
            }
            Some(previous) => Ok(previous == value),
            None => {
                bindings.insert(name.clone(), value.clone());
                Ok(true)
            }
        },
        Expression::Cons { heads, tail } => {
            let Some(items) = value.as_list() else {
                return Ok(false);
            };
            if items.len() < heads.len() {
                return Ok(false);
            }
            let (leading, rest) = items.split_at(heads.len());
            for (head, item) in heads.iter().zip(leading) {
                if !match_pattern(head, item, bindings)? {
                    return Ok(false);
                }
            }
            match_pattern(tail, &Expression::list(rest.to_vec()), bindings)
        }
        Expression::List(expected) => {
            let Some(items) = value.as_list() else {
                return Ok(false);
            };
            if items.len() != expected.len() {
                return Ok(false);
            }
            for (item_pattern, item) in expected.iter().zip(items) {
                if !match_pattern(item_pattern, item, bindings)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Expression::Number(Number::Float(_)) => Err(patterns_cannot_be_floats(pattern)),
        literal => Ok(literal == value),
    }
}

/// The first float literal anywhere in `pattern`.
pub(crate) fn float_literal(pattern: &Expression) -> Option<&Expression> {
    match pattern {
        Expression::Number(Number::Float(_)) => Some(pattern),
        Expression::List(items) => items.iter().find_map(float_literal),
        Expression::Cons { heads, tail } => heads
            .iter()
            .find_map(float_literal)
            .or_else(|| float_literal(tail)),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
