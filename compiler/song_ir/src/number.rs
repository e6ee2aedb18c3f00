//! Mixed int/float arithmetic.
//!
//! Arithmetic between two ints stays integral (checked, never wrapping);
//! any float operand promotes the operation to float. The integer-only
//! operations (`Div`, `Mod`, numeric equality) reject floats outright.

use std::cmp::Ordering;
use std::fmt;

/// A Song number.
///
/// There is no cross-variant equality: `Int(5) != Float(5.0)`.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// Failure of a numeric operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    /// An integer-only operation received a float, or int was compared with float.
    #[error("numeric mismatch: operation requires two integers of the same kind")]
    NumericMismatch,
    #[error("division by zero")]
    DivisionByZero,
    /// Checked integer arithmetic overflowed.
    #[error("integer overflow in {0}")]
    Overflow(&'static str),
}

type NumericResult = Result<Number, NumericError>;

#[inline]
fn checked(result: Option<i64>, operation: &'static str) -> NumericResult {
    result.map(Number::Int).ok_or(NumericError::Overflow(operation))
}

impl Number {
    /// The value as a float, promoting ints.
    #[expect(
        clippy::cast_precision_loss,
        reason = "int to float promotion is the language's defined behaviour"
    )]
    #[inline]
    pub fn as_float(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    pub fn plus(self, other: Number) -> NumericResult {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => checked(a.checked_add(b), "addition"),
            (a, b) => Ok(Number::Float(a.as_float() + b.as_float())),
        }
    }

    pub fn minus(self, other: Number) -> NumericResult {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => checked(a.checked_sub(b), "subtraction"),
            (a, b) => Ok(Number::Float(a.as_float() - b.as_float())),
        }
    }

    pub fn times(self, other: Number) -> NumericResult {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => checked(a.checked_mul(b), "multiplication"),
            (a, b) => Ok(Number::Float(a.as_float() * b.as_float())),
        }
    }

    /// `/`: always produces a float.
    pub fn float_divided_by(self, other: Number) -> NumericResult {
        let divisor = other.as_float();
        if divisor == 0.0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Number::Float(self.as_float() / divisor))
    }

    /// `Div`: truncating integer division.
    pub fn integer_divided_by(self, other: Number) -> NumericResult {
        match (self, other) {
            (Number::Int(_), Number::Int(0)) => Err(NumericError::DivisionByZero),
            (Number::Int(a), Number::Int(b)) => checked(a.checked_div(b), "division"),
            _ => Err(NumericError::NumericMismatch),
        }
    }

    /// `Mod`: integer remainder, sign follows the dividend.
    pub fn modulo(self, other: Number) -> NumericResult {
        match (self, other) {
            (Number::Int(_), Number::Int(0)) => Err(NumericError::DivisionByZero),
            (Number::Int(a), Number::Int(b)) => checked(a.checked_rem(b), "modulo"),
            _ => Err(NumericError::NumericMismatch),
        }
    }

    /// `%`: remainder with float promotion.
    pub fn remainder(self, other: Number) -> NumericResult {
        match (self, other) {
            (Number::Int(_), Number::Int(_)) => self.modulo(other),
            (a, b) => Ok(Number::Float(a.as_float() % b.as_float())),
        }
    }

    /// `^`: integral for int bases with non-negative int exponents.
    pub fn power(self, other: Number) -> NumericResult {
        match (self, other) {
            (Number::Int(base), Number::Int(exp)) if exp >= 0 => {
                let exp = u32::try_from(exp).map_err(|_| NumericError::Overflow("exponentiation"))?;
                checked(base.checked_pow(exp), "exponentiation")
            }
            (a, b) => Ok(Number::Float(a.as_float().powf(b.as_float()))),
        }
    }

    /// Unary minus.
    pub fn negate(self) -> NumericResult {
        match self {
            Number::Int(i) => checked(i.checked_neg(), "negation"),
            Number::Float(f) => Ok(Number::Float(-f)),
        }
    }

    /// Ordering across variants by promotion. `None` only involves NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_float().partial_cmp(&b.as_float()),
        }
    }

    /// Numeric equality as used by `Eq`: both operands must share a variant.
    pub fn equal_to(self, other: Number) -> Result<bool, NumericError> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Ok(a == b),
            (Number::Float(a), Number::Float(b)) => Ok(a == b),
            _ => Err(NumericError::NumericMismatch),
        }
    }

    /// Drop the fractional part. Out-of-range floats saturate.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation is the operation"
    )]
    pub fn truncate(self) -> Number {
        match self {
            Number::Int(_) => self,
            Number::Float(f) => Number::Int(f.trunc() as i64),
        }
    }

    /// Apply a float function (trigonometry, logarithms); always yields a float.
    pub fn map_float(self, f: impl FnOnce(f64) -> f64) -> Number {
        Number::Float(f(self.as_float()))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            // Debug keeps the trailing `.0` on integral floats.
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

#[cfg(test)]
mod tests;
