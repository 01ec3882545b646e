//! Extraction pipeline.
//!
//! ```text
//! source file ──read──▶ text ──rules──▶ WordList ──output──▶ JSON file
//! ```
//!
//! - [`source`] reads and decodes the input
//! - [`rules`] turns lines into words
//! - [`output`] renders and writes JSON
//! - [`extractor`] runs the steps in order and reports an outcome

pub mod extractor;
pub mod output;
pub mod rules;
pub mod source;

pub use extractor::WordListExtractor;
