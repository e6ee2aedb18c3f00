use super::*;
use pretty_assertions::assert_eq;

#[test]
fn int_arithmetic_stays_integral() {
    assert_eq!(Number::Int(2).plus(Number::Int(3)), Ok(Number::Int(5)));
    assert_eq!(Number::Int(2).minus(Number::Int(3)), Ok(Number::Int(-1)));
    assert_eq!(Number::Int(4).times(Number::Int(3)), Ok(Number::Int(12)));
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_eq!(Number::Int(2).plus(Number::Float(0.5)), Ok(Number::Float(2.5)));
    assert_eq!(Number::Float(1.5).times(Number::Int(2)), Ok(Number::Float(3.0)));
}

#[test]
fn float_division_always_yields_float() {
    assert_eq!(
        Number::Int(8).float_divided_by(Number::Int(4)),
        Ok(Number::Float(2.0))
    );
    assert_eq!(
        Number::Int(1).float_divided_by(Number::Int(0)),
        Err(NumericError::DivisionByZero)
    );
    assert_eq!(
        Number::Float(1.0).float_divided_by(Number::Float(0.0)),
        Err(NumericError::DivisionByZero)
    );
}

#[test]
fn integer_division_requires_ints() {
    assert_eq!(
        Number::Int(8).integer_divided_by(Number::Int(4)),
        Ok(Number::Int(2))
    );
    assert_eq!(
        Number::Int(7).integer_divided_by(Number::Int(2)),
        Ok(Number::Int(3))
    );
    assert_eq!(
        Number::Int(1).integer_divided_by(Number::Int(0)),
        Err(NumericError::DivisionByZero)
    );
    assert_eq!(
        Number::Float(8.0).integer_divided_by(Number::Int(4)),
        Err(NumericError::NumericMismatch)
    );
}

#[test]
fn modulo_requires_ints() {
    assert_eq!(Number::Int(7).modulo(Number::Int(3)), Ok(Number::Int(1)));
    assert_eq!(Number::Int(-7).modulo(Number::Int(3)), Ok(Number::Int(-1)));
    assert_eq!(
        Number::Int(7).modulo(Number::Int(0)),
        Err(NumericError::DivisionByZero)
    );
    assert_eq!(
        Number::Int(7).modulo(Number::Float(2.0)),
        Err(NumericError::NumericMismatch)
    );
}

#[test]
fn remainder_promotes() {
    assert_eq!(Number::Int(7).remainder(Number::Int(4)), Ok(Number::Int(3)));
    assert_eq!(
        Number::Float(7.5).remainder(Number::Int(2)),
        Ok(Number::Float(1.5))
    );
}

#[test]
fn checked_overflow_is_reported() {
    assert_eq!(
        Number::Int(i64::MAX).plus(Number::Int(1)),
        Err(NumericError::Overflow("addition"))
    );
    assert_eq!(
        Number::Int(i64::MIN).negate(),
        Err(NumericError::Overflow("negation"))
    );
    assert_eq!(
        Number::Int(i64::MIN).integer_divided_by(Number::Int(-1)),
        Err(NumericError::Overflow("division"))
    );
}

#[test]
fn power_keeps_ints_for_natural_exponents() {
    assert_eq!(Number::Int(2).power(Number::Int(10)), Ok(Number::Int(1024)));
    assert_eq!(Number::Int(2).power(Number::Int(-1)), Ok(Number::Float(0.5)));
    assert_eq!(Number::Int(4).power(Number::Float(0.5)), Ok(Number::Float(2.0)));
    assert_eq!(
        Number::Int(10).power(Number::Int(40)),
        Err(NumericError::Overflow("exponentiation"))
    );
}

#[test]
fn comparison_orders_across_variants() {
    assert_eq!(Number::Int(1).compare(Number::Float(1.5)), Some(Ordering::Less));
    assert_eq!(Number::Float(2.0).compare(Number::Int(2)), Some(Ordering::Equal));
    assert_eq!(Number::Int(3).compare(Number::Int(2)), Some(Ordering::Greater));
    assert_eq!(Number::Float(f64::NAN).compare(Number::Int(2)), None);
}

#[test]
fn equality_never_crosses_variants() {
    assert_ne!(Number::Int(5), Number::Float(5.0));
    assert_eq!(Number::Int(5), Number::Int(5));
    assert_eq!(Number::Int(5).equal_to(Number::Int(5)), Ok(true));
    assert_eq!(Number::Float(0.5).equal_to(Number::Float(0.25)), Ok(false));
    assert_eq!(
        Number::Int(5).equal_to(Number::Float(5.0)),
        Err(NumericError::NumericMismatch)
    );
}

#[test]
fn truncate_drops_fraction() {
    assert_eq!(Number::Float(3.9).truncate(), Number::Int(3));
    assert_eq!(Number::Float(-3.9).truncate(), Number::Int(-3));
    assert_eq!(Number::Int(7).truncate(), Number::Int(7));
}

#[test]
fn display_distinguishes_variants() {
    assert_eq!(Number::Int(2).to_string(), "2");
    assert_eq!(Number::Float(2.0).to_string(), "2.0");
    assert_eq!(Number::Float(4.1).to_string(), "4.1");
    assert_eq!(Number::Int(-12).to_string(), "-12");
}
