//! The outside world as seen by native functions.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Output and input capabilities available to builtins.
pub trait Host {
    /// Writes `text` to the program output as is.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Reads one line of input without its line terminator.
    /// Returns `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// A [`Host`] backed by the process' stdout and stdin.
#[derive(Debug, Default)]
pub struct StdHost;

impl Host for StdHost {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_terminator(line)))
    }
}

/// A [`Host`] that records output and replays queued input lines.
#[derive(Debug, Default)]
pub struct MemoryHost {
    pub output: String,
    input: VecDeque<String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host whose input yields `lines` in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output: String::new(),
            input: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl Host for MemoryHost {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}

fn trim_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_host() {
        let mut host = MemoryHost::with_input(["first", "second"]);
        host.write("a").unwrap();
        host.write("b\n").unwrap();
        assert_eq!(host.output, "ab\n");
        assert_eq!(host.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(host.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(host.read_line().unwrap(), None);
    }

    #[test]
    fn test_trim_line_terminator() {
        assert_eq!(trim_line_terminator("line\n".to_string()), "line");
        assert_eq!(trim_line_terminator("line\r\n".to_string()), "line");
        assert_eq!(trim_line_terminator("line".to_string()), "line");
    }
}
