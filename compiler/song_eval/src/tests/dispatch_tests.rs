use pretty_assertions::assert_eq;
use song_ir::{Closure, Expression, Heap, Name};

use super::{int, root_error, run_with, string, value};
use crate::{buffer_streams, initial_context, install, EvalResult, EvaluationError, Evaluator};

// Clause selection

#[test]
fn clauses_are_tried_in_declaration_order() {
    let program = r#"
foo(n) When n > 100 = "BIG"
foo(2) = "two"
foo(n) = "nine"
"#;
    assert_eq!(value(&format!("{program}foo(9)")), string("nine"));
    assert_eq!(value(&format!("{program}foo(2)")), string("two"));
    assert_eq!(value(&format!("{program}foo(101)")), string("BIG"));
}

#[test]
fn repeated_variables_must_agree() {
    let program = "foo(x, x) = x\n";
    assert_eq!(value(&format!("{program}foo(2, 2)")), int(2));
    assert_eq!(
        root_error(&format!("{program}foo(2, 3)")),
        EvaluationError::SignatureMismatch(vec![int(2), int(3)])
    );
    assert_eq!(
        root_error(&format!("{program}foo(4.1, 4.1)")),
        EvaluationError::PatternsCannotBeFloats(Expression::float(4.1))
    );
}

#[test]
fn list_patterns_select_clauses() {
    let program = r"
len([]) = 0
len([_ | tail]) = 1 + len(tail)
len([1, 2, 3])
";
    assert_eq!(value(program), int(3));
}

#[test]
fn guard_must_be_boolean() {
    assert_eq!(
        root_error("f(x) When x = x\nf(1)"),
        EvaluationError::NotABoolean(int(1))
    );
}

#[test]
fn no_matching_clause_reports_the_arguments() {
    assert_eq!(
        root_error("f(0) = 0\nf(1 + 1)"),
        EvaluationError::SignatureMismatch(vec![int(2)])
    );
}

#[test]
fn wrong_arity_evaluates_nothing() {
    let streams = buffer_streams("");
    let evaluator = Evaluator::new(streams.clone());
    let result = run_with(&evaluator, "f(x) = x\nf(1, out(\"side effect\"))");
    let err = result.err().map(|e| e.root_cause().clone());
    assert!(
        matches!(err, Some(EvaluationError::SignatureMismatch(ref args)) if args.len() == 2),
        "{err:?}"
    );
    assert_eq!(streams.output(), "");
}

#[test]
fn arguments_are_evaluated_once_left_to_right() {
    let streams = buffer_streams("");
    let evaluator = Evaluator::new(streams.clone());
    let program = r#"
pick(0, b) = b
pick(a, b) = a
pick(out(1), out(2))
"#;
    assert_eq!(run_with(&evaluator, program), Ok(int(1)));
    assert_eq!(streams.output(), "1\n2\n");
}

// Closures

#[test]
fn functions_render_as_closures() {
    assert_eq!(value("f(x) = x").to_string(), "<function f>");
    assert_eq!(value("Fn(x) = x").to_string(), "<lambda>");
}

#[test]
fn closures_capture_their_definition_context() {
    let program = r"
make(k) = Fn(x) = x + k
add5 = make(5)
add5(1)
";
    assert_eq!(value(program), int(6));
}

#[test]
fn free_variables_ignore_the_caller() {
    let program = r"
k = 1
getK() = k
useK(k) = getK()
useK(99)
";
    assert_eq!(value(program), int(1));
}

#[test]
fn later_clauses_share_the_first_capture() {
    let program = r"
y = 1
f(0) = y
y = 2
f(n) = y
";
    assert_eq!(value(&format!("{program}f(0)")), int(1));
    assert_eq!(value(&format!("{program}f(7)")), int(1));
}

#[test]
fn parameters_shadow_captured_names() {
    assert_eq!(value("x = 1\nf(x) = x\nf(2)"), int(2));
}

#[test]
fn recursion_through_own_name() {
    let program = r"
fact(0) = 1
fact(n) = n * fact(n - 1)
fact(20)
";
    assert_eq!(value(program), int(2_432_902_008_176_640_000));
}

#[test]
fn lambdas_can_be_called_directly() {
    assert_eq!(value("(Fn(x) = x * 2)(21)"), int(42));
    assert_eq!(value("twice(f, x) = f(f(x))\ntwice(Fn(n) = n + 3, 1)"), int(7));
}

#[test]
fn calling_a_non_function_fails() {
    assert_eq!(root_error("x = 1\nx(2)"), EvaluationError::NotAFunction(int(1)));
    assert_eq!(root_error("(1)(2)"), EvaluationError::NotAClosure(int(1)));
}

#[test]
fn float_literal_patterns_fail_at_declaration() {
    assert_eq!(
        root_error("f(1.5) = 1"),
        EvaluationError::PatternsCannotBeFloats(Expression::float(1.5))
    );
    assert_eq!(
        root_error("f([1, 2.5]) = 1"),
        EvaluationError::PatternsCannotBeFloats(Expression::float(2.5))
    );
}

// Tail calls

/// The closure a program's last statement evaluates to.
fn closure(source: &str) -> Heap<Closure> {
    match value(source) {
        Expression::Closure(closure) => closure,
        other => panic!("expected a closure, got {other}"),
    }
}

/// Target and arguments of a deferred tail call.
fn deferred(result: EvalResult) -> (String, Vec<Expression>) {
    match result {
        Ok(Expression::TailEval { target, args }) => (target.to_string(), args.to_vec()),
        other => panic!("expected a deferred call, got {other:?}"),
    }
}

#[test]
fn call_in_clause_body_is_deferred() {
    let f = closure("g(x) = x\nf(x) = g(x + 1)\nf");
    let evaluator = Evaluator::new(buffer_streams(""));
    assert_eq!(
        deferred(evaluator.dispatch(&f, &[int(1)])),
        ("<function g>".to_string(), vec![int(2)])
    );
}

#[test]
fn call_ending_a_block_is_deferred() {
    let f = closure("g(x) = x\nf(x) = Do\n  y = x * 2\n  g(y)\nEnd\nf");
    let evaluator = Evaluator::new(buffer_streams(""));
    assert_eq!(
        deferred(evaluator.dispatch(&f, &[int(3)])),
        ("<function g>".to_string(), vec![int(6)])
    );
}

#[test]
fn builtin_in_tail_position_runs_immediately() {
    let f = closure("f(x) = x + 1\nf");
    let evaluator = Evaluator::new(buffer_streams(""));
    assert_eq!(evaluator.dispatch(&f, &[int(1)]), Ok(int(2)));
}

#[test]
fn trampoline_resolves_deferred_calls() {
    let g = closure("g(0) = 0\ng(n) = g(n - 1)\ng");
    let context = match install(&Expression::Closure(g), &initial_context()) {
        Ok(context) => context,
        Err(e) => panic!("{}", e.trace()),
    };
    let evaluator = Evaluator::new(buffer_streams(""));

    let call = Expression::call("g", vec![int(3)]);
    let marker = match evaluator.tail_position(&call, &context) {
        Ok(marker) => marker,
        Err(e) => panic!("{}", e.trace()),
    };
    assert!(matches!(marker, Expression::TailEval { .. }), "{marker:?}");
    assert_eq!(evaluator.trampoline(marker), Ok(int(0)));
}

#[test]
fn self_tail_recursion_runs_in_constant_stack() {
    let program = r"
n.count(acc) When n Eq 0 = acc
n.count(acc) = (n - 1).count(acc + 1)
";
    assert_eq!(value(&format!("{program}5000.count(0)")), int(5000));
    assert_eq!(value(&format!("{program}200000.count(0)")), int(200_000));
}

#[test]
fn tail_call_as_last_statement_of_a_block() {
    let program = r#"
loop(0) = "done"
loop(n) = Do
  m = n - 1
  loop(m)
End
loop(100000)
"#;
    assert_eq!(value(program), string("done"));
}

#[test]
fn tail_calls_between_lambdas() {
    let program = r"
countdown = Fn(n) = Do
  step(0) = 0
  step(k) = step(k - 1)
  step(n)
End
countdown(50000)
";
    assert_eq!(value(program), int(0));
}

#[test]
fn builtins_in_tail_position_short_circuit() {
    let program = r"
safe(x) = x Eq 0 Or 10 / x > 1
safe(0)
";
    assert_eq!(value(program), Expression::Bool(true));
}

// Mutual recursion

#[test]
fn partner_declared_later_is_not_visible() {
    let program = r"
isEven(0) = true
isEven(n) = isOdd(n - 1)
isOdd(0) = false
isOdd(n) = isEven(n - 1)
";
    // isOdd captured isEven, so one hop works; isEven never sees isOdd.
    assert_eq!(value(&format!("{program}isOdd(1)")), Expression::Bool(true));
    assert_eq!(
        root_error(&format!("{program}isEven(4)")),
        EvaluationError::SymbolNotFound(Name::from("isOdd"))
    );
}

// Deep non-tail recursion

#[test]
fn deep_failure_unwinds_and_drops() {
    let program = "f(0) = nope\nf(n) = 1 + f(n - 1)\nf(100000)";
    assert_eq!(
        root_error(program),
        EvaluationError::SymbolNotFound(Name::from("nope"))
    );
}
