//! The interactive command loop.
//!
//! Bare input runs the save-boundary encoding (`@Name` → `[char:ID]`);
//! colon commands manage the roster and run the other engine operations.

use std::path::Path;

use dramatis_foundation::{Character, CharacterId, Error, Result};
use dramatis_mentions::{
    MentionLexicon, extract_reference_ids, find_mentioned_characters, mentions_to_references,
    references_to_mentions, suggest_characters,
};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

const HELP: &str = "\
commands:
  :load PATH        load a JSON roster file
  :save [PATH]      save the roster (to PATH, or where it was loaded from)
  :add ID NAME      add a character
  :alias ID NAMES   add aliases (comma-separated) to a character
  :remove ID        remove a character
  :list             show the roster
  :encode TEXT      convert @mentions to [char:ID] references
  :decode TEXT      convert [char:ID] references to @mentions
  :ids TEXT         list the ids referenced by TEXT
  :who TEXT         list the roster characters mentioned in TEXT
  :suggest PREFIX   list characters matching a partial name
  :help             show this help
  :quit             exit

bare input is encoded as if typed into a quick event";

/// Result of executing one REPL line.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    /// Text to print.
    Text(String),
    /// The loop should exit.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (roster, backing file).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "dramatis> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the read-eval-print loop until `:quit` or EOF.
    ///
    /// # Errors
    ///
    /// Returns an error only if the editor itself fails; command errors are
    /// printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            println!(
                "Dramatis {} (type :help for commands)",
                env!("CARGO_PKG_VERSION")
            );
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    match self.execute(&line) {
                        Ok(Output::Quit) => break,
                        Ok(Output::Text(text)) => println!("{text}"),
                        Err(err) => eprintln!("error: {err}"),
                    }
                }
                ReadResult::Interrupted => println!("^C"),
                ReadResult::Eof => break,
            }
        }

        Ok(())
    }

    /// Executes a single line and returns what it produced.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or bad arguments; conversion
    /// itself never fails.
    pub fn execute(&mut self, line: &str) -> Result<Output> {
        if !line.starts_with(':') {
            return Ok(Output::Text(mentions_to_references(
                line,
                self.session.roster(),
            )));
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            ":help" => Ok(Output::Text(HELP.to_string())),
            ":quit" | ":q" => Ok(Output::Quit),
            ":list" => Ok(Output::Text(self.list())),
            ":add" => self.add(rest),
            ":alias" => self.alias(rest),
            ":remove" => self.remove(rest),
            ":load" => self.load(rest),
            ":save" => self.save(rest),
            ":encode" => Ok(Output::Text(mentions_to_references(
                rest,
                self.session.roster(),
            ))),
            ":decode" => Ok(Output::Text(references_to_mentions(
                rest,
                self.session.roster(),
            ))),
            ":ids" => Ok(Output::Text(Self::ids(rest))),
            ":who" => Ok(Output::Text(self.who(rest))),
            ":suggest" => Ok(Output::Text(self.suggest(rest))),
            _ => Err(Error::unknown_command(command)),
        }
    }

    fn list(&self) -> String {
        let roster = self.session.roster();
        if roster.is_empty() {
            return "roster is empty".to_string();
        }

        let mut lines: Vec<String> = roster
            .iter()
            .map(|character| {
                let aliases: Vec<&str> = character.alias_entries().collect();
                if aliases.is_empty() {
                    format!("  {}  {}", character.id, character.name)
                } else {
                    format!("  {}  {} ({})", character.id, character.name, aliases.join(", "))
                }
            })
            .collect();

        for collision in MentionLexicon::build(roster).collisions() {
            lines.push(format!("  warning: {collision}"));
        }

        lines.join("\n")
    }

    fn add(&mut self, rest: &str) -> Result<Output> {
        let (id_text, name) = rest
            .split_once(char::is_whitespace)
            .ok_or_else(|| Error::missing_argument(":add", "an id and a name"))?;
        let id = parse_id(":add", id_text)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::missing_argument(":add", "an id and a name"));
        }

        self.session.add_character(Character::new(id, name))?;

        let mut text = format!("added {name} ({id})");
        for collision in MentionLexicon::build(self.session.roster()).collisions() {
            text.push_str(&format!("\nwarning: {collision}"));
        }
        Ok(Output::Text(text))
    }

    fn alias(&mut self, rest: &str) -> Result<Output> {
        let (id_text, aliases) = rest
            .split_once(char::is_whitespace)
            .ok_or_else(|| Error::missing_argument(":alias", "an id and at least one alias"))?;
        let id = parse_id(":alias", id_text)?;
        let aliases = aliases.trim();
        if aliases.is_empty() {
            return Err(Error::missing_argument(":alias", "an id and at least one alias"));
        }

        self.session.add_alias(id, aliases)?;
        Ok(Output::Text(format!("aliased {id} as {aliases}")))
    }

    fn remove(&mut self, rest: &str) -> Result<Output> {
        if rest.is_empty() {
            return Err(Error::missing_argument(":remove", "an id"));
        }
        let id = parse_id(":remove", rest)?;
        let removed = self.session.remove_character(id)?;
        Ok(Output::Text(format!("removed {} ({})", removed.name, removed.id)))
    }

    fn load(&mut self, rest: &str) -> Result<Output> {
        if rest.is_empty() {
            return Err(Error::missing_argument(":load", "a file path"));
        }
        let count = self.session.load_roster(Path::new(rest))?;
        Ok(Output::Text(format!("loaded {count} characters from {rest}")))
    }

    fn save(&mut self, rest: &str) -> Result<Output> {
        let path = if rest.is_empty() {
            None
        } else {
            Some(Path::new(rest))
        };
        let written = self.session.save_roster(path)?;
        Ok(Output::Text(format!(
            "saved {} characters to {}",
            self.session.roster().len(),
            written.display()
        )))
    }

    fn ids(rest: &str) -> String {
        let mut ids: Vec<i64> = extract_reference_ids(rest)
            .into_iter()
            .map(CharacterId::value)
            .collect();
        if ids.is_empty() {
            return "no references".to_string();
        }
        ids.sort_unstable();
        ids.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn who(&self, rest: &str) -> String {
        let mentioned = find_mentioned_characters(rest, self.session.roster());
        if mentioned.is_empty() {
            return "no characters mentioned".to_string();
        }
        mentioned
            .iter()
            .map(|character| format!("  {}  {}", character.id, character.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn suggest(&self, rest: &str) -> String {
        let matches = suggest_characters(rest, self.session.roster());
        if matches.is_empty() {
            return "no matches".to_string();
        }
        matches
            .iter()
            .map(|character| format!("  {}  {}", character.id, character.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parse_id(command: &'static str, text: &str) -> Result<CharacterId> {
    text.trim()
        .parse::<i64>()
        .map(CharacterId::new)
        .map_err(|_| Error::invalid_argument(command, format!("{text:?} is not an id")))
}
