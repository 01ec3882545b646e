//! Line-level extraction rules.
//!
//! Pure functions over text; no I/O happens here.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::config::SourceFormat;
use crate::types::word_list::WordList;

static RE_TRAILING_NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z]+$").unwrap());
static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n?|\n").unwrap());

/// Split text into lines on `\r\n`, `\r` or `\n`.
///
/// A final line break does not open an extra empty line.
pub fn source_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = RE_LINE_BREAK.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Remove the trailing run of characters outside `A-Z`/`a-z`.
///
/// Only the end is touched: `"run/run]"` becomes `"run/run"`, `"o'clock,"`
/// becomes `"o'clock"`, and a token with no letters becomes empty.
pub fn strip_trailing_non_alpha(token: &str) -> &str {
    match RE_TRAILING_NON_ALPHA.find(token) {
        Some(m) => &token[..m.start()],
        None => token,
    }
}

/// Whether a trimmed line looks like `word [phonetic] ...`.
pub fn is_entry_line(line: &str) -> bool {
    line.contains(' ') && line.contains('[')
}

/// The cleaned headword of a dictionary entry line, if any.
///
/// Returns `None` for lines that are not entries or whose token is all
/// punctuation.
pub fn entry_headword(line: &str) -> Option<&str> {
    let line = line.trim();
    if !is_entry_line(line) {
        return None;
    }

    let raw = line.split_once(' ').map_or(line, |(head, _)| head);
    let word = strip_trailing_non_alpha(raw);
    (!word.is_empty()).then_some(word)
}

/// Every non-blank trimmed line, verbatim.
pub fn flat_words(text: &str) -> WordList {
    source_lines(text)
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Headwords from a dictionary-style listing.
///
/// The first `header_lines` lines are dropped unconditionally; a file
/// shorter than that yields an empty list.
pub fn dictionary_words(text: &str, header_lines: usize) -> WordList {
    let mut words = WordList::new();

    for (index, line) in source_lines(text).into_iter().enumerate().skip(header_lines) {
        match entry_headword(line) {
            Some(word) => words.push(word),
            None => {
                tracing::debug!(line = index + 1, "skipping non-entry line");
            }
        }
    }

    words
}

/// Apply the rule for `format` to a whole source text.
pub fn extract_words(text: &str, format: SourceFormat) -> WordList {
    match format {
        SourceFormat::Flat => flat_words(text),
        SourceFormat::Dictionary { header_lines } => dictionary_words(text, header_lines),
    }
}
