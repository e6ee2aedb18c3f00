//! Numeric operators and float functions.

use song_ir::{Expression, Number, NumericError};

use super::{as_list, as_number};
use crate::errors::EvalResult;

pub(super) fn binary(
    a: &Expression,
    b: &Expression,
    op: impl FnOnce(Number, Number) -> Result<Number, NumericError>,
) -> EvalResult {
    let result = op(as_number(a)?, as_number(b)?)?;
    Ok(Expression::Number(result))
}

pub(super) fn unary(
    a: &Expression,
    op: impl FnOnce(Number) -> Result<Number, NumericError>,
) -> EvalResult {
    Ok(Expression::Number(op(as_number(a)?)?))
}

/// Always yields a float.
pub(super) fn float_function(a: &Expression, f: fn(f64) -> f64) -> EvalResult {
    Ok(Expression::Number(as_number(a)?.map_float(f)))
}

/// `+`: numeric addition, else list concatenation. When neither applies the
/// numeric error is the one reported.
pub(super) fn plus(a: &Expression, b: &Expression) -> EvalResult {
    match binary(a, b, Number::plus) {
        Err(err) if err.is_type_mismatch() => concat(a, b).map_err(|_| err),
        result => result,
    }
}

fn concat(a: &Expression, b: &Expression) -> EvalResult {
    let mut items = as_list(a)?.to_vec();
    items.extend_from_slice(as_list(b)?);
    Ok(Expression::list(items))
}
