//! Behavioural tests: Song source in, values and errors out.

mod dispatch_tests;
mod scope_tests;

use song_ir::Expression;
use song_parse::parse_program;

use crate::{buffer_streams, initial_context, install, EvalResult, EvaluationError, Evaluator};

/// Evaluate every statement of `source` in one context, installing
/// declarations as a session would. Returns the last statement's value.
pub(crate) fn run_with(evaluator: &Evaluator, source: &str) -> EvalResult {
    let statements = match parse_program(source) {
        Ok(statements) => statements,
        Err(e) => panic!("test source does not parse: {e}\n{source}"),
    };
    let mut context = initial_context();
    let mut last = Expression::empty_list();
    for statement in &statements {
        last = evaluator.evaluate(statement, &context)?;
        context = install(&last, &context)?;
    }
    Ok(last)
}

pub(crate) fn run(source: &str) -> EvalResult {
    run_with(&Evaluator::new(buffer_streams("")), source)
}

/// The value of the last statement; panics with the trace on failure.
pub(crate) fn value(source: &str) -> Expression {
    match run(source) {
        Ok(value) => value,
        Err(e) => panic!("{}\nwhile running:\n{source}", e.trace()),
    }
}

/// The innermost error of a failing program.
pub(crate) fn root_error(source: &str) -> EvaluationError {
    match run(source) {
        Ok(value) => panic!("expected an error, got {value}\nwhile running:\n{source}"),
        Err(e) => e.root_cause().clone(),
    }
}

pub(crate) fn int(i: i64) -> Expression {
    Expression::int(i)
}

pub(crate) fn string(s: &str) -> Expression {
    Expression::string(s)
}
