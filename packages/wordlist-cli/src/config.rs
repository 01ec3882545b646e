//! Runtime configuration for the `wordlist` binary.
//!
//! Preset paths are relative; they resolve against `WORDLIST_ROOT`
//! (default: the current directory). Paths given on the command line are
//! used exactly as typed.

use anyhow::{ensure, Result};
use dotenvy::dotenv;
use std::env;
use std::path::{Path, PathBuf};
use wordlist::{ExtractorConfig, Preset};

/// Catalog directory used when `--dir` is not given.
pub const DEFAULT_CATALOG_DIR: &str = "../vocabularys";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for preset input/output paths.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let root = env::var("WORDLIST_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        ensure!(
            root.is_dir(),
            "WORDLIST_ROOT must be an existing directory: {}",
            root.display()
        );

        Ok(Self { root })
    }

    /// Preset defaults with command-line overrides applied.
    pub fn preset(
        &self,
        preset: Preset,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> ExtractorConfig {
        let mut config = preset.config().rooted_at(&self.root);
        if let Some(input) = input {
            config.input = input;
        }
        if let Some(output) = output {
            config.output = output;
        }
        config
    }

    /// The `--dir` flag as typed, or the default directory under the root.
    pub fn catalog_dir(&self, dir: Option<PathBuf>) -> PathBuf {
        dir.unwrap_or_else(|| self.root.join(Path::new(DEFAULT_CATALOG_DIR)))
    }
}
