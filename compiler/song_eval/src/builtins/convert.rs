//! `number`, `string`, `character` and `scalar`.

use song_ir::{Expression, Number};

use super::as_char;
use crate::errors::{not_a_character, not_a_number, numeric_mismatch, EvalResult};

/// Numbers pass through; strings are parsed (`-?digits` as int, decimals and
/// exponents as float).
pub(super) fn to_number(value: &Expression) -> EvalResult {
    if let Expression::Number(_) = value {
        return Ok(value.clone());
    }
    value
        .as_string()
        .and_then(|text| parse_number(text.trim()))
        .ok_or_else(|| not_a_number(value))
}

fn parse_number(text: &str) -> Option<Expression> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse::<i64>().ok().map(Expression::int);
    }
    let well_formed = text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !well_formed {
        return None;
    }
    text.parse::<f64>().ok().map(Expression::float)
}

/// Strings are unchanged; anything else is rendered as source.
pub(super) fn to_string(value: &Expression) -> Expression {
    match value.as_string() {
        Some(_) => value.clone(),
        None => Expression::string(&value.to_string()),
    }
}

/// A Unicode scalar value to its character.
pub(super) fn to_character(value: &Expression) -> EvalResult {
    match value {
        Expression::Number(Number::Int(i)) => u32::try_from(*i)
            .ok()
            .and_then(char::from_u32)
            .map(Expression::Char)
            .ok_or_else(|| not_a_character(value)),
        Expression::Number(Number::Float(_)) => Err(numeric_mismatch()),
        Expression::Char(_) => Ok(value.clone()),
        other => Err(not_a_number(other)),
    }
}

/// A character to its Unicode scalar value.
pub(super) fn to_scalar(value: &Expression) -> EvalResult {
    Ok(Expression::int(i64::from(u32::from(as_char(value)?))))
}
