//! Core types for the Dramatis character-reference engine.
//!
//! This crate provides:
//! - [`CharacterId`] - Stable numeric character identifiers
//! - [`Character`] - A character record with a name and optional aliases
//! - [`Roster`] - An ordered collection of characters known in one context
//! - [`Error`] - Error types with a `Result` alias for the runtime layers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod character;
pub mod error;
pub mod roster;

pub use character::{Character, CharacterId};
pub use error::{Error, ErrorKind, Result};
pub use roster::Roster;
