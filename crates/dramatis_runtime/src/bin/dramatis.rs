//! Dramatis CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use dramatis_mentions::{mentions_to_references, references_to_mentions};
use dramatis_runtime::{Repl, Session};

/// Direction for one-shot conversion.
#[derive(Default, Clone, Copy)]
enum Mode {
    /// `@Name` → `[char:ID]` (the save boundary).
    #[default]
    Encode,
    /// `[char:ID]` → `@Name` (the display boundary).
    Decode,
}

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    roster: Option<PathBuf>,
    mode: Mode,
    text: Vec<String>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-e" | "--encode" => config.mode = Mode::Encode,
            "-d" | "--decode" => config.mode = Mode::Decode,
            "-r" | "--roster" => {
                i += 1;
                if i >= args.len() {
                    return Err("--roster requires a file path".into());
                }
                config.roster = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            arg => config.text.push(arg.to_string()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }
    if config.show_version {
        println!("dramatis {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut session = Session::new();
    if let Some(path) = &config.roster {
        session.load_roster(path)?;
    }

    // One-shot conversion when text was given; interactive loop otherwise.
    if config.text.is_empty() {
        let mut repl = Repl::new()?.with_session(session);
        repl.run()?;
    } else {
        let text = config.text.join(" ");
        let converted = match config.mode {
            Mode::Encode => mentions_to_references(&text, session.roster()),
            Mode::Decode => references_to_mentions(&text, session.roster()),
        };
        println!("{converted}");
    }

    Ok(())
}

fn print_help() {
    println!(
        "\
dramatis {}: character mention and reference engine

usage:
  dramatis [--roster FILE]                  start the interactive REPL
  dramatis [--roster FILE] [MODE] TEXT...   convert TEXT and exit

modes:
  -e, --encode    convert @mentions to [char:ID] references (default)
  -d, --decode    convert [char:ID] references to @mentions

options:
  -r, --roster FILE   load a JSON roster file
  -h, --help          show this help
  -V, --version       show the version",
        env!("CARGO_PKG_VERSION")
    );
}
