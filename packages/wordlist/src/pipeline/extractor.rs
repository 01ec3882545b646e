//! The read → parse → clean → write pipeline for one source file.

use crate::error::Result;
use crate::types::{
    config::{ExtractorConfig, Preset, SourceFormat},
    outcome::{ExtractionOutcome, Report},
    word_list::WordList,
};

use super::{output, rules, source};

/// Converts one vocabulary source file into a JSON word list.
///
/// Holds no state between runs; every call to [`run`](Self::run) reads the
/// source afresh.
#[derive(Debug, Clone)]
pub struct WordListExtractor {
    config: ExtractorConfig,
}

impl WordListExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extractor with the built-in defaults for `preset`.
    pub fn for_preset(preset: Preset) -> Self {
        Self::new(preset.config())
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Read the source and apply the line rule. Nothing is written.
    pub fn extract(&self) -> Result<WordList> {
        let text = source::read_source(&self.config.input)?;
        let words = rules::extract_words(&text, self.config.format);

        tracing::info!(
            input = %self.config.input.display(),
            format = format_name(self.config.format),
            words = words.len(),
            "extracted words"
        );
        Ok(words)
    }

    /// Write an already-extracted list to the configured output.
    pub fn write(&self, words: &WordList) -> Result<()> {
        output::write_word_list(
            words,
            &self.config.output,
            self.config.json,
            self.config.create_dirs,
        )
    }

    /// Extract then write.
    ///
    /// The output file is only touched once extraction has succeeded.
    pub fn run(&self) -> ExtractionOutcome {
        let result = self.extract().and_then(|words| {
            self.write(&words)?;
            Ok(Report {
                words,
                output: self.config.output.clone(),
            })
        });

        if let Err(err) = &result {
            tracing::warn!(
                input = %self.config.input.display(),
                output = %self.config.output.display(),
                kind = ?err.kind(),
                error = %err,
                "extraction failed"
            );
        }

        ExtractionOutcome::from_result(result)
    }
}

fn format_name(format: SourceFormat) -> &'static str {
    match format {
        SourceFormat::Flat => "flat",
        SourceFormat::Dictionary { .. } => "dictionary",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_flat() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("cet6.txt");
        let output = dir.path().join("out/cet6.json");
        fs::write(&input, "apple\n\nbanana\n cherry \n").unwrap();

        let extractor =
            WordListExtractor::new(ExtractorConfig::new(&input, &output, SourceFormat::Flat));
        let outcome = extractor.run();

        assert!(matches!(outcome, ExtractionOutcome::Extracted(_)));
        assert_eq!(outcome.words().unwrap().len(), 3);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "[\n  \"apple\",\n  \"banana\",\n  \"cherry\"\n]"
        );
    }

    #[test]
    fn test_run_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out/cet4_words.json");

        let config = Preset::Cet4
            .config()
            .with_input(dir.path().join("raw/cet4.txt"))
            .with_output(&output);
        let outcome = WordListExtractor::new(config).run();

        assert_eq!(outcome.error_kind(), Some(ErrorKind::MissingInput));
        assert!(outcome.words().is_none());
        assert!(!output.exists());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_run_short_dictionary_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("cet4.txt");
        let output = dir.path().join("cet4_words.json");
        fs::write(&input, "header\nabandon [ə'bændən] v.\n").unwrap();

        let config = Preset::Cet4.config().with_input(&input).with_output(&output);
        let outcome = WordListExtractor::new(config).run();

        assert!(matches!(outcome, ExtractionOutcome::Empty(_)));
        assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
    }

    #[test]
    fn test_run_reports_write_failure() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("cet6.txt");
        let output = dir.path().join("cet6.json");
        fs::write(&input, "apple\nbanana\n").unwrap();
        fs::create_dir(&output).unwrap();

        let extractor =
            WordListExtractor::new(ExtractorConfig::new(&input, &output, SourceFormat::Flat));
        let outcome = extractor.run();

        assert!(matches!(outcome, ExtractionOutcome::Failed(_)));
        assert_eq!(outcome.error_kind(), Some(ErrorKind::WriteFailure));
        assert!(outcome.summary().starts_with("An error occurred:"));
        assert!(output.is_dir());
    }

    #[test]
    fn test_extract_does_not_write() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("cet6.txt");
        let output = dir.path().join("cet6.json");
        fs::write(&input, "one\ntwo\n").unwrap();

        let extractor =
            WordListExtractor::new(ExtractorConfig::new(&input, &output, SourceFormat::Flat));
        assert_eq!(extractor.extract().unwrap().len(), 2);
        assert!(!output.exists());
    }
}
