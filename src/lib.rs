//! Dramatis - Character mention and reference engine
//!
//! This crate re-exports all layers of the Dramatis system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: dramatis_runtime    — REPL, CLI, roster files
//! Layer 1: dramatis_mentions   — lexicon, conversion, extraction, suggestion
//! Layer 0: dramatis_foundation — Core types (Character, Roster, Error)
//! ```

pub use dramatis_foundation as foundation;
pub use dramatis_mentions as mentions;
pub use dramatis_runtime as runtime;
