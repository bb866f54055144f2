//! Session state for the REPL and CLI.
//!
//! The session owns the working roster and remembers which file it came
//! from. Roster files are JSON arrays of character records:
//!
//! ```json
//! [
//!   { "id": 1, "name": "John Doe", "aliases": ["Johnny", "JD"] },
//!   { "id": 2, "name": "Mary Smith" }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use dramatis_foundation::{Character, CharacterId, Error, Result, Roster};

/// State for an interactive session: the working roster and its backing file.
#[derive(Default)]
pub struct Session {
    /// The working roster.
    roster: Roster,

    /// Where the roster was loaded from or last saved to.
    roster_path: Option<PathBuf>,

    /// Whether the roster has unsaved edits.
    dirty: bool,
}

impl Session {
    /// Creates a session with an empty roster and no backing file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the working roster.
    #[must_use]
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    /// Returns the working roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The backing file, if any.
    #[must_use]
    pub fn roster_path(&self) -> Option<&Path> {
        self.roster_path.as_deref()
    }

    /// True if the roster has edits not yet written to its backing file.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replaces the working roster with the contents of a JSON roster file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// character records.
    pub fn load_roster(&mut self, path: &Path) -> Result<usize> {
        let data = fs::read_to_string(path)?;
        let characters: Vec<Character> =
            serde_json::from_str(&data).map_err(|err| Error::roster_format(err.to_string()))?;
        self.roster = Roster::from_characters(characters);
        self.roster_path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(self.roster.len())
    }

    /// Writes the working roster as JSON, to `path` or to the backing file.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is available or the write fails.
    pub fn save_roster(&mut self, path: Option<&Path>) -> Result<PathBuf> {
        let target = path
            .or(self.roster_path.as_deref())
            .ok_or_else(Error::no_backing_file)?
            .to_path_buf();

        let mut json = serde_json::to_string_pretty(&self.roster)
            .map_err(|err| Error::roster_format(err.to_string()))?;
        json.push('\n');
        fs::write(&target, json)?;

        self.roster_path = Some(target.clone());
        self.dirty = false;
        Ok(target)
    }

    /// Adds a character to the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is already taken.
    pub fn add_character(&mut self, character: Character) -> Result<()> {
        if self.roster.get(character.id).is_some() {
            return Err(Error::duplicate_character(character.id));
        }
        self.roster.push(character);
        self.dirty = true;
        Ok(())
    }

    /// Adds an alias to an existing character.
    ///
    /// # Errors
    ///
    /// Returns an error if no character has the given id.
    pub fn add_alias(&mut self, id: CharacterId, alias: impl Into<String>) -> Result<()> {
        let character = self
            .roster
            .get_mut(id)
            .ok_or_else(|| Error::character_not_found(id))?;
        character.aliases.push(alias.into());
        self.dirty = true;
        Ok(())
    }

    /// Removes a character from the roster, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if no character has the given id.
    pub fn remove_character(&mut self, id: CharacterId) -> Result<Character> {
        let removed = self
            .roster
            .remove(id)
            .ok_or_else(|| Error::character_not_found(id))?;
        self.dirty = true;
        Ok(removed)
    }
}
