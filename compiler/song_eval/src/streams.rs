//! Input and output streams for the `in`, `out` and `err` built-ins.
//!
//! Output can be directed to different destinations:
//! - Std: the process's stdin/stdout/stderr (default)
//! - Buffer: in-memory input and captured output, for tests and embedding
//!
//! Uses enum dispatch instead of trait objects; the set of destinations is closed.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Streams bound to the process's standard handles.
#[derive(Default)]
pub struct StdStreams;

impl StdStreams {
    pub fn write_out(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    pub fn write_err(&self, text: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        err.write_all(text.as_bytes())?;
        err.flush()
    }

    /// One line without its terminator, or `None` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

/// Streams backed by memory: queued input lines, captured output.
pub struct BufferStreams {
    input: Mutex<VecDeque<String>>,
    output: Mutex<String>,
    errors: Mutex<String>,
}

impl BufferStreams {
    /// Buffer streams that read the lines of `input`.
    pub fn new(input: &str) -> Self {
        BufferStreams {
            input: Mutex::new(input.lines().map(str::to_owned).collect()),
            output: Mutex::new(String::new()),
            errors: Mutex::new(String::new()),
        }
    }

    pub fn write_out(&self, text: &str) {
        self.output.lock().push_str(text);
    }

    pub fn write_err(&self, text: &str) {
        self.errors.lock().push_str(text);
    }

    pub fn read_line(&self) -> Option<String> {
        self.input.lock().pop_front()
    }

    /// Everything written to the output stream so far.
    pub fn output(&self) -> String {
        self.output.lock().clone()
    }

    /// Everything written to the error stream so far.
    pub fn errors(&self) -> String {
        self.errors.lock().clone()
    }

    pub fn clear(&self) {
        self.output.lock().clear();
        self.errors.lock().clear();
    }
}

impl Default for BufferStreams {
    fn default() -> Self {
        Self::new("")
    }
}

/// Stream implementation using enum dispatch.
pub enum Streams {
    /// Process standard streams (default).
    Std(StdStreams),
    /// In-memory streams (tests, embedding).
    Buffer(BufferStreams),
}

impl Streams {
    pub fn write_out(&self, text: &str) -> io::Result<()> {
        match self {
            Self::Std(s) => s.write_out(text),
            Self::Buffer(b) => {
                b.write_out(text);
                Ok(())
            }
        }
    }

    pub fn write_err(&self, text: &str) -> io::Result<()> {
        match self {
            Self::Std(s) => s.write_err(text),
            Self::Buffer(b) => {
                b.write_err(text);
                Ok(())
            }
        }
    }

    pub fn read_line(&self) -> io::Result<Option<String>> {
        match self {
            Self::Std(s) => s.read_line(),
            Self::Buffer(b) => Ok(b.read_line()),
        }
    }

    /// Captured output; empty for the standard streams.
    pub fn output(&self) -> String {
        match self {
            Self::Std(_) => String::new(),
            Self::Buffer(b) => b.output(),
        }
    }

    /// Captured error output; empty for the standard streams.
    pub fn errors(&self) -> String {
        match self {
            Self::Std(_) => String::new(),
            Self::Buffer(b) => b.errors(),
        }
    }
}

/// Streams shared between an evaluator and whoever inspects them.
pub type SharedStreams = Arc<Streams>;

pub fn std_streams() -> SharedStreams {
    Arc::new(Streams::Std(StdStreams))
}

/// Buffer streams whose input is the lines of `input`.
pub fn buffer_streams(input: &str) -> SharedStreams {
    Arc::new(Streams::Buffer(BufferStreams::new(input)))
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;

    #[test]
    fn buffer_captures_output_and_errors_separately() {
        let streams = buffer_streams("");
        streams.write_out("hello\n").unwrap();
        streams.write_err("oops\n").unwrap();
        assert_eq!(streams.output(), "hello\n");
        assert_eq!(streams.errors(), "oops\n");
    }

    #[test]
    fn buffer_reads_lines_then_reports_end() {
        let streams = buffer_streams("first\nsecond\n");
        assert_eq!(streams.read_line().unwrap(), Some("first".to_string()));
        assert_eq!(streams.read_line().unwrap(), Some("second".to_string()));
        assert_eq!(streams.read_line().unwrap(), None);
    }

    #[test]
    fn buffer_clear_empties_captures() {
        let buffer = BufferStreams::default();
        buffer.write_out("x");
        buffer.write_err("y");
        buffer.clear();
        assert!(buffer.output().is_empty());
        assert!(buffer.errors().is_empty());
    }

    #[test]
    fn std_streams_capture_nothing() {
        let streams = std_streams();
        assert_eq!(streams.output(), "");
        assert_eq!(streams.errors(), "");
    }

    #[test]
    fn line_endings_are_stripped() {
        assert_eq!(strip_line_ending("a\r\n".to_string()), "a");
        assert_eq!(strip_line_ending("b\n".to_string()), "b");
        assert_eq!(strip_line_ending("c".to_string()), "c");
    }

    #[test]
    fn buffer_is_thread_safe() {
        use std::thread;

        let streams = buffer_streams("");
        let other = streams.clone();
        let t = thread::spawn(move || {
            for _ in 0..100 {
                other.write_out("a\n").unwrap();
            }
        });
        for _ in 0..100 {
            streams.write_out("b\n").unwrap();
        }
        t.join().unwrap();
        assert_eq!(streams.output().lines().count(), 200);
    }
}
