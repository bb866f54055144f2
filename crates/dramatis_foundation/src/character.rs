//! Character identifiers and records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier for a character.
///
/// Ids are assigned by the caller (story stores typically use table rowids)
/// and are conventionally positive. The engine never allocates or recycles
/// them; it only matches against them.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CharacterId(i64);

impl CharacterId {
    /// Creates a character id from its raw numeric value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for CharacterId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Debug for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharacterId({})", self.0)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A character record: id, display name, and alternate names.
///
/// Alias strings may themselves hold comma-separated lists (story archives
/// persist all aliases in a single TEXT column), so matching code should
/// go through [`Character::alias_entries`] rather than reading `aliases`
/// directly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Character {
    /// Stable identifier.
    pub id: CharacterId,
    /// Primary display name.
    pub name: String,
    /// Alternate names, matched equivalently to the primary name during
    /// mention resolution.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
}

impl Character {
    /// Creates a character with no aliases.
    #[must_use]
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Adds a single alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Replaces the alias list.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Yields each usable alias entry: comma-split, trimmed, non-empty.
    pub fn alias_entries(&self) -> impl Iterator<Item = &str> {
        self.aliases
            .iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
    }
}
