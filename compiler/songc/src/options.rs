//! Command-line options, parsed by hand.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive session (no arguments).
    Repl,
    /// `run <file.song>`, or a bare `.song` path.
    Run(PathBuf),
    /// `eval "<source>"`: evaluate and print the last value.
    Eval(String),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    /// Load the bundled standard library at startup. Off with `--no-std`.
    pub stdlib: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl Options {
    /// Parse the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Options, UsageError> {
        let stdlib = !args.iter().any(|arg| arg == "--no-std");
        let mut rest = args.iter().filter(|arg| *arg != "--no-std").map(String::as_str);

        let command = match rest.next() {
            None => Command::Repl,
            Some("run") => Command::Run(PathBuf::from(
                rest.next().ok_or(UsageError::MissingArgument("file path"))?,
            )),
            Some("eval") => Command::Eval(
                rest.next()
                    .ok_or(UsageError::MissingArgument("source to evaluate"))?
                    .to_owned(),
            ),
            Some("help" | "--help" | "-h") => Command::Help,
            Some("version" | "--version" | "-V") => Command::Version,
            Some(path) if is_song_file(path) => Command::Run(PathBuf::from(path)),
            Some(other) => return Err(UsageError::UnknownCommand(other.to_owned())),
        };

        if let Some(extra) = rest.next() {
            return Err(UsageError::UnexpectedArgument(extra.to_owned()));
        }
        Ok(Options { command, stdlib })
    }
}

fn is_song_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("song"))
}
