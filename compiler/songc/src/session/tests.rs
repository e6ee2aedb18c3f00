use super::*;
use pretty_assertions::assert_eq;
use song_eval::buffer_streams;

fn bare_session() -> Session {
    match Session::new(Evaluator::new(buffer_streams("")), false) {
        Ok(session) => session,
        Err(err) => panic!("{err}"),
    }
}

#[test]
fn results_are_rendered() {
    let mut session = bare_session();
    assert_eq!(session.input("1 + 2"), Reply::Output("3".to_owned()));
    assert_eq!(session.input(r#""a" + "b""#), Reply::Output("\"ab\"".to_owned()));
    assert_eq!(session.input(""), Reply::Output(String::new()));
}

#[test]
fn declarations_persist_between_lines() {
    let mut session = bare_session();
    assert_eq!(session.input("x = 20"), Reply::Output("x = 20".to_owned()));
    assert_eq!(
        session.input("double(n) = n * 2"),
        Reply::Output("<function double>".to_owned())
    );
    assert_eq!(session.input("double(x)"), Reply::Output("40".to_owned()));
}

#[test]
fn unfinished_statements_continue() {
    let mut session = bare_session();
    assert_eq!(session.input("f(n) = Do"), Reply::Incomplete);
    assert!(session.is_pending());
    assert_eq!(session.input("  m = n + 1"), Reply::Incomplete);
    assert_eq!(session.input("  m * m"), Reply::Incomplete);
    assert_eq!(session.input("End"), Reply::Output("<function f>".to_owned()));
    assert!(!session.is_pending());
    assert_eq!(session.input("f(2)"), Reply::Output("9".to_owned()));
}

#[test]
fn syntax_errors_discard_pending_input() {
    let mut session = bare_session();
    assert_eq!(session.input("[1,"), Reply::Incomplete);
    let Reply::Error(message) = session.input("2 )") else {
        panic!("expected a syntax error");
    };
    assert!(message.starts_with("Syntax error at line 2, column 3"), "{message}");
    assert!(!session.is_pending());
}

#[test]
fn evaluation_errors_render_the_trace() {
    let mut session = bare_session();
    assert_eq!(
        session.input("1 Div 0"),
        Reply::Error("Evaluation error\n ↳ 1 Div 0\n  💥  division by zero".to_owned())
    );
}

#[test]
fn commands_manage_bindings() {
    let mut session = bare_session();
    let builtins = session.context().len();
    session.input("x = 1");
    session.input("y = 2");
    assert_eq!(session.context().len(), builtins + 2);

    assert_eq!(session.input("?forget x"), Reply::Output(String::new()));
    assert!(!session.context().contains("x"));
    assert_eq!(
        session.input("?forget x"),
        Reply::Error("unknown symbol: x".to_owned())
    );

    assert_eq!(session.input("?reset"), Reply::Output(String::new()));
    assert_eq!(session.context().len(), builtins);
    assert_eq!(session.input("?quit"), Reply::Quit);
    assert_eq!(
        session.input("?dance"),
        Reply::Error("unknown command: ?dance".to_owned())
    );
}

#[test]
fn question_mark_describes_bindings() {
    let mut session = bare_session();
    session.input("zz = [1, 2]");
    let Reply::Output(description) = session.input("?") else {
        panic!("expected a description");
    };
    assert!(description.lines().any(|line| line == "Div = Div"));
    assert_eq!(description.lines().last(), Some("zz = [1, 2]"));
}

#[test]
fn run_stops_at_the_first_error() {
    let mut session = bare_session();
    let result = session.run("a = 1\nb = nope\nc = 3");
    assert!(matches!(result, Err(SessionError::Evaluation(_))));
    assert!(session.context().contains("a"));
    assert!(!session.context().contains("c"));
}
