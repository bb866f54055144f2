//! Compiled patterns shared by the conversion and scan passes.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a persisted reference token, capturing its digit run.
///
/// Only an interior of ASCII decimal digits counts as a reference; any other
/// bracket text is ordinary prose.
pub(crate) static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[char:(\d+)\]").expect("reference pattern compiles"));

/// Matches a bare single-word mention, capturing the word.
pub(crate) static WORD_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)").expect("word mention pattern compiles"));
