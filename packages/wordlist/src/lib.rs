//! Vocabulary Word-List Extraction
//!
//! Turns plain-text exam vocabulary lists (CET4/CET6) into JSON arrays of
//! words.
//!
//! # Source formats
//!
//! - **Flat**: one word per line; every non-blank trimmed line is a word.
//! - **Dictionary**: a short header, then `word [phonetic] definition`
//!   entries. Only lines holding both a space and a `[` count, and the
//!   headword loses any trailing non-letters.
//!
//! # Usage
//!
//! ```rust,no_run
//! use wordlist::{ExtractionOutcome, Preset, WordListExtractor};
//!
//! let outcome = WordListExtractor::for_preset(Preset::Cet4).run();
//! println!("{}", outcome.summary());
//! if let ExtractionOutcome::Failed(err) = outcome {
//!     eprintln!("failed: {}", err);
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`] - Word lists, configuration and run outcomes
//! - [`pipeline`] - Reading, line rules, JSON output, the extractor
//! - [`catalog`] - Loading a directory of generated vocabularies
//! - [`error`] - Typed errors

pub mod catalog;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-export core types at crate root
pub use catalog::{load_catalog, Catalog, Vocabulary};
pub use error::{ErrorKind, Result, WordListError};
pub use pipeline::{
    output::{render, write_word_list},
    rules::{dictionary_words, extract_words, flat_words, strip_trailing_non_alpha},
    source::read_source,
    WordListExtractor,
};
pub use types::{
    config::{ExtractorConfig, JsonStyle, Preset, SourceFormat, DEFAULT_HEADER_LINES},
    outcome::{ExtractionOutcome, Report},
    word_list::WordList,
};
