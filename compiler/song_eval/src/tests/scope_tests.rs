use pretty_assertions::assert_eq;
use song_ir::Expression;

use super::{int, root_error, string, value};
use crate::EvaluationError;

#[test]
fn statements_run_in_order() {
    assert_eq!(value("Do 1, 2, 3 End"), int(3));
    assert_eq!(value("Do\n  a = 2\n  b = a * 3\n  a + b\nEnd"), int(8));
}

#[test]
fn empty_block_is_an_error() {
    assert_eq!(root_error("Do End"), EvaluationError::EmptyScope);
}

#[test]
fn blocks_declare_local_functions() {
    let program = r"
Do
  sq(x) = x * x
  sq(4) + sq(3)
End
";
    assert_eq!(value(program), int(25));
}

#[test]
fn local_function_starts_a_fresh_closure() {
    let program = r#"
g(0) = "outer"
h() = Do
  g(1) = "inner"
  g(0)
End
"#;
    assert_eq!(
        root_error(&format!("{program}h()")),
        EvaluationError::SignatureMismatch(vec![int(0)])
    );
    assert_eq!(value(&format!("{program}g(0)")), string("outer"));
}

#[test]
fn local_clauses_accumulate() {
    let program = r#"
Do
  sign(0) = "zero"
  sign(n) When n < 0 = "negative"
  sign(n) = "positive"
  [sign(-3), sign(0), sign(3)]
End
"#;
    assert_eq!(
        value(program),
        Expression::list(vec![string("negative"), string("zero"), string("positive")])
    );
}

#[test]
fn assignments_destructure() {
    assert_eq!(
        value("Do\n  [h | t] = [1, 2, 3]\n  t\nEnd"),
        Expression::list(vec![int(2), int(3)])
    );
    assert_eq!(value("Do [a, b] = [4, 5], a * b End"), int(20));
    assert_eq!(value("Do [x, x] = [7, 7], x End"), int(7));
    assert_eq!(value("Do _ = 1, 2 End"), int(2));
}

#[test]
fn failed_destructuring_is_a_mismatch() {
    assert_eq!(
        root_error("[a, b] = [1]"),
        EvaluationError::SignatureMismatch(vec![Expression::list(vec![int(1)])])
    );
}

#[test]
fn locals_do_not_leak() {
    assert_eq!(
        root_error("Do x = 1, x End\nx"),
        EvaluationError::SymbolNotFound("x".into())
    );
}

#[test]
fn nested_blocks_see_enclosing_locals() {
    assert_eq!(value("Do a = 2, Do b = a * 3, b End End"), int(6));
}

#[test]
fn block_result_can_be_a_tail_call() {
    let program = r"
sum([], acc) = acc
sum([x | xs], acc) = Do
  next = acc + x
  sum(xs, next)
End
sum([1, 2, 3, 4], 0)
";
    assert_eq!(value(program), int(10));
}
