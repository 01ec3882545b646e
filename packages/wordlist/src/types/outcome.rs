//! The result of one extraction run.

use std::path::PathBuf;

use super::word_list::WordList;
use crate::error::{ErrorKind, WordListError};

/// What a run produced.
///
/// Separates a list that happens to be empty from a run that produced
/// nothing at all, so callers never have to guess which one they got.
#[derive(Debug)]
pub enum ExtractionOutcome {
    /// At least one word was extracted and written.
    Extracted(Report),

    /// The source parsed cleanly but yielded no words. `[]` was written.
    Empty(Report),

    /// Nothing was written.
    Failed(WordListError),
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub words: WordList,
    pub output: PathBuf,
}

impl Report {
    pub fn count(&self) -> usize {
        self.words.len()
    }
}

impl ExtractionOutcome {
    /// Build an outcome from a finished write.
    pub fn from_result(result: crate::error::Result<Report>) -> Self {
        match result {
            Ok(report) if report.words.is_empty() => Self::Empty(report),
            Ok(report) => Self::Extracted(report),
            Err(err) => Self::Failed(err),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    /// The report for either success case.
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Extracted(report) | Self::Empty(report) => Some(report),
            Self::Failed(_) => None,
        }
    }

    /// Words extracted, or `None` when the run failed.
    pub fn words(&self) -> Option<&WordList> {
        self.report().map(|r| &r.words)
    }

    pub fn error(&self) -> Option<&WordListError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error().map(WordListError::kind)
    }

    /// Human-readable one-line summary.
    pub fn summary(&self) -> String {
        match self {
            Self::Extracted(report) | Self::Empty(report) => format!(
                "Successfully extracted {} words and saved to {}",
                report.count(),
                report.output.display()
            ),
            Self::Failed(err @ WordListError::MissingInput { .. }) => format!("Error: {}", err),
            Self::Failed(err) => format!("An error occurred: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(words: &[&str]) -> Report {
        Report {
            words: words.iter().copied().collect(),
            output: PathBuf::from("out.json"),
        }
    }

    #[test]
    fn test_empty_list_is_distinct_from_failure() {
        let empty = ExtractionOutcome::from_result(Ok(report(&[])));
        assert!(matches!(empty, ExtractionOutcome::Empty(_)));
        assert!(empty.is_success());
        assert_eq!(empty.words().map(WordList::len), Some(0));

        let failed = ExtractionOutcome::from_result(Err(WordListError::MissingInput {
            path: PathBuf::from("missing.txt"),
        }));
        assert!(!failed.is_success());
        assert!(failed.words().is_none());
        assert_eq!(failed.error_kind(), Some(ErrorKind::MissingInput));
    }

    #[test]
    fn test_summary_lines() {
        let ok = ExtractionOutcome::from_result(Ok(report(&["a", "b"])));
        assert_eq!(
            ok.summary(),
            "Successfully extracted 2 words and saved to out.json"
        );

        let missing = ExtractionOutcome::Failed(WordListError::MissingInput {
            path: PathBuf::from("raw/cet4.txt"),
        });
        assert_eq!(missing.summary(), "Error: file not found at raw/cet4.txt");
    }
}
