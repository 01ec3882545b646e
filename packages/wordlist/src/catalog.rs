//! Loading a directory of generated vocabulary files.
//!
//! Each `*.json` file holds one word list; its lower-cased file stem is the
//! vocabulary name (`CET6.json` → `cet6`).

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, WordListError};
use crate::types::word_list::WordList;

/// One vocabulary file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pub name: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub words: WordList,
}

/// All vocabularies in a directory, ordered by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<Vocabulary>,
}

impl Catalog {
    pub fn entries(&self) -> &[Vocabulary] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&Vocabulary> {
        self.entries.iter().find(|v| v.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Words across every vocabulary, duplicates included.
    pub fn total_words(&self) -> usize {
        self.entries.iter().map(|v| v.words.len()).sum()
    }
}

/// Load every `*.json` word list in `dir`.
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let read_dir = fs::read_dir(dir).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => WordListError::MissingInput {
            path: dir.to_path_buf(),
        },
        _ => WordListError::Read {
            path: dir.to_path_buf(),
            source,
        },
    })?;

    let mut paths = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| WordListError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut entries: Vec<Vocabulary> = Vec::with_capacity(paths.len());
    for path in paths {
        let vocabulary = load_vocabulary(&path)?;
        tracing::debug!(
            name = %vocabulary.name,
            words = vocabulary.words.len(),
            "loaded vocabulary"
        );

        // Names are case-folded; the file loaded last wins.
        match entries.iter_mut().find(|v| v.name == vocabulary.name) {
            Some(existing) => {
                tracing::warn!(
                    name = %vocabulary.name,
                    replaced = %existing.path.display(),
                    by = %vocabulary.path.display(),
                    "duplicate vocabulary name"
                );
                *existing = vocabulary;
            }
            None => entries.push(vocabulary),
        }
    }

    tracing::info!(dir = %dir.display(), vocabularies = entries.len(), "loaded catalog");
    Ok(Catalog { entries })
}

fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| WordListError::Catalog {
            path: path.to_path_buf(),
            reason: "file name is not valid UTF-8".to_string(),
        })?;

    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words: WordList =
        serde_json::from_str(&content).map_err(|e| WordListError::Catalog {
            path: path.to_path_buf(),
            reason: format!("expected a JSON array of strings: {}", e),
        })?;

    Ok(Vocabulary {
        name,
        path: path.to_path_buf(),
        words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_load_catalog_sorted_and_lowercased() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CET6.json"), r#"["abandon","ability"]"#).unwrap();
        fs::write(dir.path().join("cet4.json"), r#"["able"]"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let catalog = load_catalog(dir.path()).unwrap();

        let names: Vec<&str> = catalog.entries().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["cet6", "cet4"]);
        assert_eq!(catalog.total_words(), 3);
        assert_eq!(catalog.get("cet4").unwrap().words.len(), 1);
    }

    #[test]
    fn test_load_catalog_case_collision_last_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CET4.json"), r#"["old"]"#).unwrap();
        fs::write(dir.path().join("cet4.json"), r#"["new","words"]"#).unwrap();

        let catalog = load_catalog(dir.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        let cet4 = catalog.get("cet4").unwrap();
        assert_eq!(cet4.words.as_slice(), &["new".to_string(), "words".to_string()]);
        assert_eq!(cet4.path, dir.path().join("cet4.json"));
    }

    #[test]
    fn test_load_catalog_rejects_non_string_arrays() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.json"), r#"{"words": 3}"#).unwrap();

        let err = load_catalog(dir.path()).unwrap_err();
        assert!(matches!(err, WordListError::Catalog { .. }));
    }

    #[test]
    fn test_load_catalog_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = load_catalog(&dir.path().join("vocabularys")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingInput);
    }

    #[test]
    fn test_empty_dir_is_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let catalog = load_catalog(dir.path()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.total_words(), 0);
    }
}
