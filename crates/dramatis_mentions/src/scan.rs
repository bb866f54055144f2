//! Scanning text for character references and mentions.

use std::collections::{HashMap, HashSet};

use dramatis_foundation::{Character, CharacterId, Roster};

use crate::patterns;

/// Collects the set of character ids referenced by `[char:ID]` tokens.
///
/// Needs no roster: this is a pure scan. Duplicates collapse; digit runs too
/// large for an id are skipped; anything else in brackets never matches.
#[must_use]
pub fn extract_reference_ids(text: &str) -> HashSet<CharacterId> {
    if text.is_empty() {
        return HashSet::new();
    }

    patterns::REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<i64>().ok())
        .map(CharacterId::new)
        .collect()
}

/// Returns the subset of `roster` mentioned by `text`, in roster order.
///
/// Accepts mixed text: `[char:ID]` tokens are matched against the roster by
/// the string form of the id, and bare `@word` mentions are matched
/// case-insensitively against primary names. Only single-word mentions are
/// recognized here, and aliases are not consulted; multi-word and alias
/// mentions reach a roster through their persisted reference form instead
/// (see [`crate::convert::mentions_to_references`]).
#[must_use]
pub fn find_mentioned_characters<'r>(text: &str, roster: &'r Roster) -> Vec<&'r Character> {
    if text.is_empty() || roster.is_empty() {
        return Vec::new();
    }

    let mut by_id_string: HashMap<String, &Character> = HashMap::with_capacity(roster.len());
    let mut by_name: HashMap<String, &Character> = HashMap::with_capacity(roster.len());
    for character in roster {
        by_id_string.insert(character.id.value().to_string(), character);
        if !character.name.is_empty() {
            by_name.insert(character.name.to_lowercase(), character);
        }
    }

    let mut mentioned: HashSet<CharacterId> = HashSet::new();

    for caps in patterns::REFERENCE.captures_iter(text) {
        if let Some(character) = by_id_string.get(&caps[1]) {
            mentioned.insert(character.id);
        }
    }

    for caps in patterns::WORD_MENTION.captures_iter(text) {
        if let Some(character) = by_name.get(&caps[1].to_lowercase()) {
            mentioned.insert(character.id);
        }
    }

    roster
        .iter()
        .filter(|character| mentioned.contains(&character.id))
        .collect()
}
