//! Integration tests for the dramatis_mentions crate.
//!
//! Tests for the mention engine:
//! - Mention/reference conversion in both directions
//! - Reference-id extraction
//! - Mentioned-character lookup over mixed text
//! - Completion suggestions
//! - Round-trip and totality properties

mod conversion_tests;
mod extraction_tests;
mod lookup_tests;
mod suggestion_tests;
