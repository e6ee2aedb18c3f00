//! One interactive or scripted session.

use std::mem;

use song_eval::{initial_context, install, EvaluationError, Evaluator, SharedStreams};
use song_ir::{Context, Expression};
use song_parse::{parse_program, ParseError};
use thiserror::Error;
use tracing::debug;

use crate::stdlib;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Syntax error at line {line}, column {column}: {error}")]
    Syntax {
        line: usize,
        column: usize,
        #[source]
        error: ParseError,
    },
    #[error("{}", .0.trace())]
    Evaluation(#[from] EvaluationError),
    #[error("standard library module `{module}` failed to load\n{cause}")]
    Stdlib {
        module: &'static str,
        #[source]
        cause: Box<SessionError>,
    },
}

impl SessionError {
    /// Locate `error` in `source` by line and column, both 1-based.
    #[cold]
    pub fn syntax(source: &str, error: ParseError) -> Self {
        let before = source.get(..error.span.start).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit('\n')
            .next()
            .map_or(0, |text| text.chars().count())
            + 1;
        SessionError::Syntax {
            line,
            column,
            error,
        }
    }
}

/// What the REPL should do after a line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// The statement is not finished; prompt for a continuation line.
    Incomplete,
    /// Text to show on the output stream. May be empty.
    Output(String),
    /// A rendered syntax or evaluation error.
    Error(String),
    Quit,
}

/// Session state: the current bindings, the bindings to return to on
/// `?reset`, and input collected for a statement that is not finished yet.
pub struct Session {
    evaluator: Evaluator,
    context: Context,
    reset_context: Context,
    pending: String,
}

impl Session {
    /// Start from the built-ins, plus the standard library when `with_stdlib`.
    pub fn new(evaluator: Evaluator, with_stdlib: bool) -> Result<Self, SessionError> {
        let mut context = initial_context();
        if with_stdlib {
            context = stdlib::load(&evaluator, context)?;
        }
        Ok(Session {
            evaluator,
            reset_context: context.clone(),
            context,
            pending: String::new(),
        })
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn streams(&self) -> &SharedStreams {
        self.evaluator.streams()
    }

    /// Whether earlier input is waiting for the rest of its statement.
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Evaluate every statement of `source` in order, installing each
    /// result. Stops at the first error.
    pub fn run(&mut self, source: &str) -> Result<Vec<Expression>, SessionError> {
        let statements =
            parse_program(source).map_err(|error| SessionError::syntax(source, error))?;
        statements
            .iter()
            .map(|statement| self.execute(statement))
            .collect()
    }

    /// Feed one line of REPL input.
    ///
    /// `?` commands are only recognised at the start of a statement. Other
    /// input accumulates until it parses; each completed statement is
    /// evaluated and its value rendered, one per line.
    pub fn input(&mut self, line: &str) -> Reply {
        if self.pending.is_empty() {
            if let Some(command) = line.trim().strip_prefix('?') {
                return self.command(command);
            }
        } else {
            self.pending.push('\n');
        }
        self.pending.push_str(line);

        let statements = match parse_program(&self.pending) {
            Ok(statements) => statements,
            Err(error) if error.is_unexpected_eof() => return Reply::Incomplete,
            Err(error) => {
                let source = mem::take(&mut self.pending);
                return Reply::Error(SessionError::syntax(&source, error).to_string());
            }
        };
        self.pending.clear();

        let mut shown = Vec::with_capacity(statements.len());
        for statement in &statements {
            match self.execute(statement) {
                Ok(value) => shown.push(value.to_string()),
                Err(err) => return Reply::Error(err.to_string()),
            }
        }
        Reply::Output(shown.join("\n"))
    }

    fn execute(&mut self, statement: &Expression) -> Result<Expression, SessionError> {
        let value = self.evaluator.evaluate(statement, &self.context)?;
        self.context = install(&value, &self.context)?;
        Ok(value)
    }

    fn command(&mut self, command: &str) -> Reply {
        let words: Vec<&str> = command.split_whitespace().collect();
        match words.as_slice() {
            [] => Reply::Output(self.context.describe()),
            ["forget", name] => {
                if !self.context.contains(name) {
                    return Reply::Error(EvaluationError::SymbolNotFound((*name).into()).to_string());
                }
                debug!(name, "forgetting binding");
                self.context = self.context.without(name);
                Reply::Output(String::new())
            }
            ["reset"] => {
                debug!("resetting session context");
                self.context = self.reset_context.clone();
                Reply::Output(String::new())
            }
            ["quit"] => Reply::Quit,
            _ => Reply::Error(format!("unknown command: ?{}", command.trim())),
        }
    }
}

#[cfg(test)]
mod tests;
