//! Source code representation and error location.

use std::fmt;

/// Represents source code.
pub struct Source<'a> {
    /// Name used when reporting errors (usually the file path).
    pub name: &'a str,
    /// Original source code.
    pub content: &'a str,
}

impl<'a> Source<'a> {
    /// Create a new `Source` with the specified `name` and `content`.
    pub fn new(name: &'a str, content: &'a str) -> Self {
        Self { name, content }
    }

    /// Converts a byte offset into a 1-based line and column.
    /// Offsets past the end of the content are clamped to the end.
    pub fn locate(&self, offset: usize) -> Location {
        let offset = offset.min(self.content.len());
        let mut line = 1;
        let mut column = 1;
        for (index, ch) in self.content.char_indices() {
            if index >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Location { line, column }
    }

    /// Creates a printable report for `message` at the byte offset `position`.
    /// Errors without a position are reported against the whole source.
    pub fn report(&self, message: impl ToString, position: Option<usize>) -> Report<'_> {
        Report {
            name: self.name,
            message: message.to_string(),
            location: position.map(|position| self.locate(position)),
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new("<input>", content)
    }
}

/// A 1-based line and column inside a [`Source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An error message tied to a [`Source`].
#[derive(Debug, Clone)]
pub struct Report<'a> {
    name: &'a str,
    message: String,
    location: Option<Location>,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(
                f,
                "error: {message} at {location} ({name})",
                message = self.message,
                location = location,
                name = self.name
            ),
            None => write!(f, "error: {} ({})", self.message, self.name),
        }
    }
}
