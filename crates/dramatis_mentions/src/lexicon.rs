//! Name and alias lookup tables built from a roster.
//!
//! The lexicon is the per-call working table behind mention resolution: every
//! primary name and alias, lower-cased, mapped to its character id.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use dramatis_foundation::{CharacterId, Roster};

/// A lower-cased name/alias → character id table.
///
/// Entries are kept in insertion order: characters are taken longest primary
/// name first (stable on ties), and for each character the primary name is
/// registered before its aliases. Conversion passes walk entries in exactly
/// this order, which is what makes "John Doe" win over "John" when one name
/// leads another.
///
/// Re-registering an existing key overwrites its id in place (the key keeps
/// its table position) and, when the ids differ, records a
/// [`NameCollision`]. The conversions themselves stay silent about
/// collisions; callers that want stricter rosters can inspect
/// [`MentionLexicon::collisions`].
#[derive(Clone, Debug, Default)]
pub struct MentionLexicon {
    /// (lower-cased key, id) pairs in registration order.
    entries: Vec<(String, CharacterId)>,
    /// Key → position in `entries`.
    index: HashMap<String, usize>,
    /// Keys that were claimed by more than one character.
    collisions: Vec<NameCollision>,
}

impl MentionLexicon {
    /// Builds the lexicon for a roster.
    #[must_use]
    pub fn build(roster: &Roster) -> Self {
        let mut lexicon = Self::default();

        for character in roster.sorted_by_name_length_desc() {
            if !character.name.is_empty() {
                lexicon.insert(character.name.to_lowercase(), character.id);
            }
            for alias in character.alias_entries() {
                lexicon.insert(alias.to_lowercase(), character.id);
            }
        }

        lexicon
    }

    /// Registers a lower-cased key for a character.
    fn insert(&mut self, key: String, id: CharacterId) {
        match self.index.entry(key) {
            Entry::Occupied(slot) => {
                let position = *slot.get();
                let (stored_key, stored_id) = &mut self.entries[position];
                if *stored_id != id {
                    self.collisions.push(NameCollision {
                        key: stored_key.clone(),
                        displaced: *stored_id,
                        kept: id,
                    });
                }
                *stored_id = id;
            }
            Entry::Vacant(slot) => {
                self.entries.push((slot.key().clone(), id));
                slot.insert(self.entries.len() - 1);
            }
        }
    }

    /// Looks up a name or alias, case-insensitively.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<CharacterId> {
        let position = *self.index.get(&name.to_lowercase())?;
        Some(self.entries[position].1)
    }

    /// Iterates (key, id) pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, CharacterId)> {
        self.entries.iter().map(|(key, id)| (key.as_str(), *id))
    }

    /// Keys claimed by more than one character, in the order the overwrites
    /// happened.
    #[must_use]
    pub fn collisions(&self) -> &[NameCollision] {
        &self.collisions
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no keys were registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A name or alias claimed by more than one character.
///
/// The later registration wins; earlier text matching the key resolves to
/// `kept` from then on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameCollision {
    /// The contested lower-cased key.
    pub key: String,
    /// The id that lost the key.
    pub displaced: CharacterId,
    /// The id the key now resolves to.
    pub kept: CharacterId,
}

impl fmt::Display for NameCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name {:?} is claimed by characters {} and {}; {} wins",
            self.key, self.displaced, self.kept, self.kept
        )
    }
}
