//! Line editor abstraction for the REPL.
//!
//! A trait-based wrapper over rustyline, so the REPL can be driven by a
//! scripted editor in tests.

use dramatis_foundation::{Error, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);
}

/// The rustyline-backed editor used by the interactive binary.
pub struct RustylineEditor {
    inner: DefaultEditor,
}

impl RustylineEditor {
    /// Creates a new editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let inner = DefaultEditor::new().map_err(readline_error)?;
        Ok(Self { inner })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.inner.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(err) => Err(readline_error(err)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.inner.add_history_entry(line);
    }
}

fn readline_error(source: ReadlineError) -> Error {
    Error::from(std::io::Error::other(source.to_string()))
}
