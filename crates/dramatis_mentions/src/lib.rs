//! Character mention and reference transformation.
//!
//! This crate converts between the human-facing `@Name` mention syntax and
//! the persisted `[char:ID]` reference syntax, and answers roster queries
//! over text in either form.
//!
//! # Architecture
//!
//! ```text
//! "@John Doe met @Johnny"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LEXICON BUILD   │  → {"john doe" → 1, "johnny" → 1, ...}  (longest name first)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NAME PASSES     │  → "[char:1] met @Johnny"   (one pass per entry)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ WORD FALLBACK   │  → "[char:1] met [char:1]"  (bare @word mentions)
//! └─────────────────┘
//! ```
//!
//! The reverse direction replaces each `[char:ID]` token with the id's
//! primary name. Unknown names and unknown ids pass through untouched in
//! both directions; nothing in this crate returns an error.
//!
//! # Modules
//!
//! - [`lexicon`] - Name/alias lookup table built from a roster
//! - [`convert`] - Mention to reference conversion and back
//! - [`scan`] - Reference-id extraction and mentioned-character lookup
//! - [`suggest`] - Completion filtering and in-progress mention detection

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod lexicon;
mod patterns;
pub mod scan;
pub mod suggest;

// Re-export main entry points for convenience
pub use convert::{mentions_to_references, references_to_mentions};
pub use lexicon::{MentionLexicon, NameCollision};
pub use scan::{extract_reference_ids, find_mentioned_characters};
pub use suggest::{MentionPrefix, mention_in_progress, suggest_characters};
