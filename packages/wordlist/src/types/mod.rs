//! Data types for word-list extraction.

pub mod config;
pub mod outcome;
pub mod word_list;
