//! Ordered character collections.

use crate::character::{Character, CharacterId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered collection of characters known in one context (e.g. one story).
///
/// Order is the caller's insertion order and is significant for output: lookup
/// results come back in roster order, and when two characters collide on a
/// name the later entry wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster from a list of characters, preserving order.
    #[must_use]
    pub fn from_characters(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    /// Appends a character.
    pub fn push(&mut self, character: Character) {
        self.characters.push(character);
    }

    /// Removes the first character with the given id, returning it.
    pub fn remove(&mut self, id: CharacterId) -> Option<Character> {
        let position = self.characters.iter().position(|c| c.id == id)?;
        Some(self.characters.remove(position))
    }

    /// Looks up a character by id.
    #[must_use]
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Looks up a character by id, mutably.
    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Iterates characters in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.characters.iter()
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// True if the roster holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Characters ordered by descending primary-name length.
    ///
    /// The sort is stable: characters with equal-length names keep their
    /// roster order. Longer names must be registered first so that a name
    /// containing a shorter one as a leading phrase ("John Doe" vs "John")
    /// is matched preferentially.
    #[must_use]
    pub fn sorted_by_name_length_desc(&self) -> Vec<&Character> {
        let mut sorted: Vec<&Character> = self.characters.iter().collect();
        sorted.sort_by(|a, b| b.name.len().cmp(&a.name.len()));
        sorted
    }
}

impl FromIterator<Character> for Roster {
    fn from_iter<I: IntoIterator<Item = Character>>(iter: I) -> Self {
        Self {
            characters: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.characters.iter()
    }
}

impl Extend<Character> for Roster {
    fn extend<I: IntoIterator<Item = Character>>(&mut self, iter: I) {
        self.characters.extend(iter);
    }
}
