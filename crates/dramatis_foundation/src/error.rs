//! Error types for the Dramatis runtime layers.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! The core text operations are total and never construct these: malformed
//! or unmatched tokens pass through conversion verbatim. Errors arise only
//! at the edges: roster files, terminal I/O, command parsing.

use thiserror::Error;

use crate::character::CharacterId;

/// Result alias used throughout Dramatis.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Dramatis operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a roster file format error.
    #[must_use]
    pub fn roster_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RosterFormat {
            message: message.into(),
        })
    }

    /// Creates a character not found error.
    #[must_use]
    pub fn character_not_found(id: CharacterId) -> Self {
        Self::new(ErrorKind::CharacterNotFound(id))
    }

    /// Creates a duplicate character error.
    #[must_use]
    pub fn duplicate_character(id: CharacterId) -> Self {
        Self::new(ErrorKind::DuplicateCharacter(id))
    }

    /// Creates a no-backing-file error.
    #[must_use]
    pub fn no_backing_file() -> Self {
        Self::new(ErrorKind::NoBackingFile)
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(command.into()))
    }

    /// Creates a missing argument error.
    #[must_use]
    pub fn missing_argument(command: &'static str, expected: &'static str) -> Self {
        Self::new(ErrorKind::MissingArgument { command, expected })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(command: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            command,
            message: message.into(),
        })
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(source))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Underlying I/O failure (terminal or roster file).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A roster file could not be parsed.
    #[error("roster format error: {message}")]
    RosterFormat {
        /// Description of what was wrong with the file.
        message: String,
    },

    /// A character id was not present in the working roster.
    #[error("character not found: {0}")]
    CharacterNotFound(CharacterId),

    /// A character id is already present in the working roster.
    #[error("character already exists: {0}")]
    DuplicateCharacter(CharacterId),

    /// A save was requested with no backing roster file.
    #[error("no roster file to save to; provide a path")]
    NoBackingFile,

    /// A REPL command was not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A REPL command was missing a required argument.
    #[error("{command} requires {expected}")]
    MissingArgument {
        /// The command that was invoked.
        command: &'static str,
        /// Description of the expected argument.
        expected: &'static str,
    },

    /// A REPL command argument could not be parsed.
    #[error("invalid argument to {command}: {message}")]
    InvalidArgument {
        /// The command that was invoked.
        command: &'static str,
        /// Description of the parse failure.
        message: String,
    },
}
