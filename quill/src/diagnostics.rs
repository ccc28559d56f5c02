//! Level tagged diagnostic output, enabled with `--debug`.

use console::style;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Done,
    Error,
}

impl Level {
    fn tag(self) -> String {
        match self {
            Level::Info => style("[INFO]").blue().for_stderr().to_string(),
            Level::Debug => style("[DEBUG]").yellow().for_stderr().to_string(),
            Level::Done => style("[DONE]").green().for_stderr().to_string(),
            Level::Error => style("[ERROR]").red().for_stderr().to_string(),
        }
    }
}

/// Writes diagnostics to stderr. Does nothing unless enabled.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    enabled: bool,
}

impl Diagnostics {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::Info, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Level::Debug, message);
    }

    pub fn done(&self, message: impl fmt::Display) {
        self.emit(Level::Done, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::Error, message);
    }

    /// The line that would be written for `message`, if diagnostics are enabled.
    pub fn line(&self, level: Level, message: impl fmt::Display) -> Option<String> {
        if self.enabled {
            Some(format!("{} {}", level.tag(), message))
        } else {
            None
        }
    }

    fn emit(&self, level: Level, message: impl fmt::Display) {
        if let Some(line) = self.line(level, message) {
            eprintln!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled() {
        let diagnostics = Diagnostics::new(false);
        assert_eq!(diagnostics.line(Level::Info, "lexed"), None);
    }

    #[test]
    fn test_enabled() {
        let diagnostics = Diagnostics::new(true);
        let line = diagnostics.line(Level::Done, "ran 3 statements").unwrap();
        assert!(line.contains("[DONE]"));
        assert!(line.ends_with(" ran 3 statements"));
        assert!(diagnostics
            .line(Level::Error, "boom")
            .unwrap()
            .contains("[ERROR]"));
    }
}
