//! Conversion between mention and reference syntax.
//!
//! `@Name` is what a writer types; `[char:ID]` is what the store persists.
//! [`mentions_to_references`] runs at the save boundary and
//! [`references_to_mentions`] at the load/display boundary. Both are total:
//! text that does not resolve passes through verbatim.

use std::borrow::Cow;
use std::collections::HashMap;

use dramatis_foundation::{CharacterId, Roster};
use regex::{Captures, Regex};

use crate::lexicon::MentionLexicon;
use crate::patterns;

/// Converts every recognizable `@Name` or `@Alias` mention to `[char:ID]`.
///
/// Matching is case-insensitive. A mention is the literal `@` immediately
/// followed by a registered name or alias, which must be followed by a word
/// boundary, whitespace, or the end of the text; the boundary text itself is
/// preserved. One substitution pass runs per lexicon entry, longest names
/// first, each over the output of the previous pass, then a final pass
/// catches any remaining single-word `@word` mention. Mentions that resolve
/// to no roster entry are left as typed.
///
/// An empty `text` or an empty `roster` returns the text unchanged.
#[must_use]
pub fn mentions_to_references(text: &str, roster: &Roster) -> String {
    if text.is_empty() || roster.is_empty() {
        return text.to_string();
    }

    let lexicon = MentionLexicon::build(roster);
    let mut result = text.to_string();

    for (key, id) in lexicon.entries() {
        // Names may contain spaces and regex metacharacters; the escaped
        // name is matched as one literal span.
        let Ok(pattern) = Regex::new(&format!(r"(?i)@({})(\b|\s|$)", regex::escape(key))) else {
            continue;
        };
        if let Cow::Owned(replaced) = pattern.replace_all(&result, |caps: &Captures<'_>| {
            format!("[char:{}]{}", id, &caps[2])
        }) {
            result = replaced;
        }
    }

    // Fallback: single-word mentions the per-name passes left behind.
    patterns::WORD_MENTION
        .replace_all(&result, |caps: &Captures<'_>| {
            match lexicon.resolve(&caps[1]) {
                Some(id) => format!("[char:{id}]"),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Converts every resolvable `[char:ID]` reference to `@Name`.
///
/// A reference token whose id is absent from the roster (common when a
/// caller supplies one story's characters while the text references
/// another's) is preserved verbatim, as is any digit run too large for an
/// id. The last roster entry wins when two characters share an id.
///
/// An empty `text` or an empty `roster` returns the text unchanged.
#[must_use]
pub fn references_to_mentions(text: &str, roster: &Roster) -> String {
    if text.is_empty() || roster.is_empty() {
        return text.to_string();
    }

    let mut names: HashMap<CharacterId, &str> = HashMap::with_capacity(roster.len());
    for character in roster {
        names.insert(character.id, character.name.as_str());
    }

    patterns::REFERENCE
        .replace_all(text, |caps: &Captures<'_>| {
            caps[1]
                .parse::<i64>()
                .ok()
                .and_then(|raw| names.get(&CharacterId::new(raw)))
                .map_or_else(|| caps[0].to_string(), |name| format!("@{name}"))
        })
        .into_owned()
}
