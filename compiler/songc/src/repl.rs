//! The interactive read-eval-print loop.

use std::io;

use crate::{Reply, Session};

pub const PROMPT: &str = "> ";
pub const CONTINUATION_PROMPT: &str = ".. ";

/// Read lines until `?quit` or end of input.
///
/// All I/O goes through the session's streams, the same ones `in` and `out`
/// use, so a program reading input mid-session sees the next line.
pub fn repl(session: &mut Session) -> io::Result<()> {
    let streams = session.streams().clone();
    loop {
        streams.write_out(if session.is_pending() {
            CONTINUATION_PROMPT
        } else {
            PROMPT
        })?;
        let Some(line) = streams.read_line()? else {
            return streams.write_out("\n");
        };
        match session.input(&line) {
            Reply::Incomplete => {}
            Reply::Output(text) if text.is_empty() => {}
            Reply::Output(text) => streams.write_out(&format!("{text}\n"))?,
            Reply::Error(text) => streams.write_err(&format!("{text}\n"))?,
            Reply::Quit => return Ok(()),
        }
    }
}
