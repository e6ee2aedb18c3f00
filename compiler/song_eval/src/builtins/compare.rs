//! Ordering and equality.
//!
//! `Eq` tries each operand interpretation in turn (boolean, number,
//! character, list) and moves on only when an operand has the wrong type.
//! Int against float is a numeric mismatch, not a fall-through.

use std::cmp::Ordering;

use song_ir::Expression;

use super::{as_bool, as_char, as_list, as_number};
use crate::errors::{cannot_compare, EvalResult};

/// `< > <= >=` over numbers (mixed variants promote) and characters.
pub(super) fn order(a: &Expression, b: &Expression, accept: fn(Ordering) -> bool) -> EvalResult {
    let ordering = match (a, b) {
        (Expression::Char(x), Expression::Char(y)) => Some(x.cmp(y)),
        _ => as_number(a)?.compare(as_number(b)?),
    };
    Ok(Expression::Bool(ordering.is_some_and(accept)))
}

type Interpretation = fn(&Expression, &Expression) -> EvalResult<bool>;

const INTERPRETATIONS: [Interpretation; 4] = [bool_equal, number_equal, char_equal, list_equal];

pub(super) fn equal(a: &Expression, b: &Expression) -> EvalResult<bool> {
    for interpretation in INTERPRETATIONS {
        match interpretation(a, b) {
            Err(err) if err.is_type_mismatch() => {}
            result => return result,
        }
    }
    Err(cannot_compare(a, b))
}

fn bool_equal(a: &Expression, b: &Expression) -> EvalResult<bool> {
    Ok(as_bool(a)? == as_bool(b)?)
}

fn number_equal(a: &Expression, b: &Expression) -> EvalResult<bool> {
    Ok(as_number(a)?.equal_to(as_number(b)?)?)
}

fn char_equal(a: &Expression, b: &Expression) -> EvalResult<bool> {
    Ok(as_char(a)? == as_char(b)?)
}

/// Same length and pairwise `Eq`, recursively.
fn list_equal(a: &Expression, b: &Expression) -> EvalResult<bool> {
    let (xs, ys) = (as_list(a)?, as_list(b)?);
    if xs.len() != ys.len() {
        return Ok(false);
    }
    for (x, y) in xs.iter().zip(ys) {
        if !equal(x, y)? {
            return Ok(false);
        }
    }
    Ok(true)
}
