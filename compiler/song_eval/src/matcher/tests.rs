use super::*;
use pretty_assertions::assert_eq;

use crate::errors::EvaluationError;

fn int(i: i64) -> Expression {
    Expression::int(i)
}

fn name(n: &str) -> Expression {
    Expression::name(n)
}

fn bound(patterns: &[Expression], args: &[Expression]) -> Option<Vec<(String, Expression)>> {
    match bind_parameters(patterns, args) {
        Ok(bindings) => bindings.map(|b| {
            let mut pairs: Vec<_> = b.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            pairs
        }),
        Err(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn names_bind_and_ignore_does_not() {
    assert_eq!(
        bound(&[name("a"), Expression::Ignore], &[int(1), int(2)]),
        Some(vec![("a".to_string(), int(1))])
    );
}

#[test]
fn arity_must_match() {
    assert_eq!(bound(&[name("a")], &[int(1), int(2)]), None);
    assert_eq!(bound(&[], &[]), Some(vec![]));
}

#[test]
fn literals_match_by_equality() {
    assert_eq!(bound(&[int(2)], &[int(2)]), Some(vec![]));
    assert_eq!(bound(&[int(2)], &[int(3)]), None);
    assert_eq!(bound(&[int(2)], &[Expression::float(2.0)]), None);
    assert_eq!(
        bound(&[Expression::string("hi")], &[Expression::string("hi")]),
        Some(vec![])
    );
    assert_eq!(bound(&[Expression::Bool(true)], &[Expression::Bool(false)]), None);
}

#[test]
fn repeated_names_must_agree() {
    assert_eq!(
        bound(&[name("x"), name("x")], &[int(2), int(2)]),
        Some(vec![("x".to_string(), int(2))])
    );
    assert_eq!(bound(&[name("x"), name("x")], &[int(2), int(3)]), None);
}

#[test]
fn repeated_float_bindings_are_rejected() {
    let result = bind_parameters(
        &[name("x"), name("x")],
        &[Expression::float(4.1), Expression::float(4.1)],
    );
    assert_eq!(
        result,
        Err(EvaluationError::PatternsCannotBeFloats(Expression::float(4.1)))
    );
}

#[test]
fn cons_splits_heads_from_tail() {
    let pattern = Expression::cons(vec![name("h")], name("t"));
    let list = Expression::list(vec![int(1), int(2), int(3)]);
    assert_eq!(
        bound(&[pattern.clone()], &[list]),
        Some(vec![
            ("h".to_string(), int(1)),
            ("t".to_string(), Expression::list(vec![int(2), int(3)])),
        ])
    );
    assert_eq!(bound(&[pattern.clone()], &[Expression::empty_list()]), None);
    assert_eq!(bound(&[pattern], &[int(1)]), None);
}

#[test]
fn cons_tail_can_be_empty() {
    let pattern = Expression::cons(vec![name("h")], Expression::empty_list());
    assert_eq!(
        bound(&[pattern], &[Expression::list(vec![int(9)])]),
        Some(vec![("h".to_string(), int(9))])
    );
}

#[test]
fn list_patterns_need_exact_length() {
    let pattern = Expression::list(vec![name("a"), name("b")]);
    assert_eq!(
        bound(&[pattern.clone()], &[Expression::list(vec![int(1), int(2)])]),
        Some(vec![("a".to_string(), int(1)), ("b".to_string(), int(2))])
    );
    assert_eq!(bound(&[pattern], &[Expression::list(vec![int(1)])]), None);
}

#[test]
fn repeated_names_across_nested_patterns() {
    let patterns = [Expression::cons(vec![name("x")], Expression::Ignore), name("x")];
    let args = [Expression::list(vec![int(5), int(6)]), int(5)];
    assert_eq!(bound(&patterns, &args), Some(vec![("x".to_string(), int(5))]));
}

#[test]
fn float_literal_patterns_are_found_anywhere() {
    let nested = Expression::cons(
        vec![name("a")],
        Expression::list(vec![Expression::float(1.5)]),
    );
    assert_eq!(float_literal(&nested), Some(&Expression::float(1.5)));
    assert_eq!(float_literal(&Expression::list(vec![int(1)])), None);
}
