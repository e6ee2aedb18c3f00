//! `in`, `out` and `err`.

use song_ir::Expression;

use super::text_of;
use crate::errors::{io_error, EvalResult};
use crate::streams::Streams;

/// Write the optional prompt, then read one line. End of input reads as `""`.
pub(super) fn read(streams: &Streams, prompt: Option<&Expression>) -> EvalResult {
    if let Some(prompt) = prompt {
        streams
            .write_out(&text_of(prompt))
            .map_err(|err| io_error(&err))?;
    }
    let line = streams
        .read_line()
        .map_err(|err| io_error(&err))?
        .unwrap_or_default();
    Ok(Expression::string(&line))
}

/// Write `value` and a newline to the output stream; returns `value`.
pub(super) fn write_out(streams: &Streams, value: &Expression) -> EvalResult {
    streams
        .write_out(&format!("{}\n", text_of(value)))
        .map_err(|err| io_error(&err))?;
    Ok(value.clone())
}

/// Write `value` and a newline to the error stream; returns `value`.
pub(super) fn write_err(streams: &Streams, value: &Expression) -> EvalResult {
    streams
        .write_err(&format!("{}\n", text_of(value)))
        .map_err(|err| io_error(&err))?;
    Ok(value.clone())
}
