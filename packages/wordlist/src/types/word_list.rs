//! The ordered list of extracted words.

use serde::{Deserialize, Deserializer, Serialize};

/// Words in first-seen order. Duplicates are kept; empty strings never
/// enter the list, whether pushed or deserialized.
///
/// Serializes as a bare JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word. Empty strings are ignored.
    pub fn push(&mut self, word: impl Into<String>) {
        let word = word.into();
        if !word.is_empty() {
            self.words.push(word);
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn into_inner(self) -> Vec<String> {
        self.words
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.push(word);
        }
        list
    }
}

impl<'de> Deserialize<'de> for WordList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(|words| words.into_iter().collect())
    }
}

impl IntoIterator for WordList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}
