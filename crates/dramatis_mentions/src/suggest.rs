//! Completion support for mention entry.
//!
//! The pure half of an autocomplete popup: which characters match what the
//! writer has typed so far, and whether the cursor currently sits inside a
//! partially-typed mention.

use dramatis_foundation::{Character, Roster};

/// A partially-typed mention at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MentionPrefix<'a> {
    /// Byte offset of the `@` in the text.
    pub offset: usize,
    /// The text between the `@` and the cursor (may be empty).
    pub partial: &'a str,
}

/// Characters whose name contains `filter`, case-insensitively, sorted
/// alphabetically by lower-cased name.
///
/// An empty filter returns the whole roster, sorted.
#[must_use]
pub fn suggest_characters<'r>(filter: &str, roster: &'r Roster) -> Vec<&'r Character> {
    let needle = filter.to_lowercase();
    let mut matches: Vec<&Character> = roster
        .iter()
        .filter(|character| character.name.to_lowercase().contains(&needle))
        .collect();
    matches.sort_by_key(|character| character.name.to_lowercase());
    matches
}

/// Detects a mention being typed at `cursor` (a byte offset into `text`).
///
/// A mention is in progress when the nearest `@` before the cursor sits at
/// the start of the text or after whitespace, and no space separates it from
/// the cursor. Out-of-range or non-boundary cursors yield `None`.
#[must_use]
pub fn mention_in_progress(text: &str, cursor: usize) -> Option<MentionPrefix<'_>> {
    if cursor == 0 {
        return None;
    }
    let head = text.get(..cursor)?;
    let offset = head.rfind('@')?;

    if offset > 0 {
        let preceding = head[..offset].chars().next_back()?;
        if !preceding.is_whitespace() {
            return None;
        }
    }

    let partial = &head[offset + 1..];
    // A literal space means the writer finished the mention and moved on.
    if partial.contains(' ') {
        return None;
    }

    Some(MentionPrefix { offset, partial })
}
