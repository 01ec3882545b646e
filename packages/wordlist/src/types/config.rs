//! Configuration types for extraction and output.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of leading lines skipped in dictionary-style sources.
pub const DEFAULT_HEADER_LINES: usize = 3;

/// How lines of a source file map to words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceFormat {
    /// One word per line; every non-blank trimmed line is kept verbatim.
    Flat,

    /// Header lines, then `word [phonetic] definition` entries.
    Dictionary {
        /// Lines skipped unconditionally before entries begin.
        header_lines: usize,
    },
}

impl SourceFormat {
    /// Dictionary format with the standard header size.
    pub fn dictionary() -> Self {
        Self::Dictionary {
            header_lines: DEFAULT_HEADER_LINES,
        }
    }
}

/// JSON rendering options for the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonStyle {
    /// Spaces per indentation level.
    pub indent: usize,

    /// Escape every non-ASCII character as `\uXXXX`.
    ///
    /// When false, non-ASCII text is written as raw UTF-8.
    pub ascii_only: bool,
}

impl Default for JsonStyle {
    fn default() -> Self {
        Self {
            indent: 2,
            ascii_only: true,
        }
    }
}

/// Built-in source/output pairs for the exam word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// CET6: flat list, 2-space indent, ASCII-safe output.
    Cet6,
    /// CET4: dictionary list, 4-space indent, UTF-8 output.
    Cet4,
}

impl Preset {
    /// Short name used on the command line and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cet6 => "cet6",
            Self::Cet4 => "cet4",
        }
    }

    /// The default configuration for this preset.
    pub fn config(&self) -> ExtractorConfig {
        match self {
            Self::Cet6 => ExtractorConfig {
                input: PathBuf::from("raw/cet6.txt"),
                output: PathBuf::from("../vocabularys/cet6.json"),
                format: SourceFormat::Flat,
                json: JsonStyle {
                    indent: 2,
                    ascii_only: true,
                },
                create_dirs: true,
            },
            Self::Cet4 => ExtractorConfig {
                input: PathBuf::from("src/script/raw/cet4.txt"),
                output: PathBuf::from("cet4_words.json"),
                format: SourceFormat::dictionary(),
                json: JsonStyle {
                    indent: 4,
                    ascii_only: false,
                },
                create_dirs: true,
            },
        }
    }
}

/// Everything a single extraction run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Source text file.
    pub input: PathBuf,

    /// Destination JSON file.
    pub output: PathBuf,

    /// Line-to-word rule.
    pub format: SourceFormat,

    /// Output rendering.
    #[serde(default)]
    pub json: JsonStyle,

    /// Create missing parent directories of `output`.
    ///
    /// Default: true.
    #[serde(default = "default_create_dirs")]
    pub create_dirs: bool,
}

fn default_create_dirs() -> bool {
    true
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Preset::Cet6.config()
    }
}

impl ExtractorConfig {
    /// Create a config for the given paths and format with default output style.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        format: SourceFormat,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            format,
            json: JsonStyle::default(),
            create_dirs: true,
        }
    }

    /// Set the input path.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the JSON indent width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.json.indent = indent;
        self
    }

    /// Toggle ASCII-only escaping.
    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.json.ascii_only = ascii_only;
        self
    }

    /// Toggle creation of the output directory.
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Resolve relative input and output paths against `root`.
    ///
    /// Absolute paths are left untouched.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        if self.input.is_relative() {
            self.input = root.join(&self.input);
        }
        if self.output.is_relative() {
            self.output = root.join(&self.output);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_defaults() {
        let cet6 = Preset::Cet6.config();
        assert_eq!(cet6.format, SourceFormat::Flat);
        assert_eq!(cet6.output, PathBuf::from("../vocabularys/cet6.json"));
        assert_eq!(cet6.json.indent, 2);
        assert!(cet6.json.ascii_only);

        let cet4 = Preset::Cet4.config();
        assert_eq!(cet4.format, SourceFormat::Dictionary { header_lines: 3 });
        assert_eq!(cet4.input, PathBuf::from("src/script/raw/cet4.txt"));
        assert_eq!(cet4.json.indent, 4);
        assert!(!cet4.json.ascii_only);
    }

    #[test]
    fn test_rooted_at_keeps_absolute_paths() {
        let config = ExtractorConfig::new("raw/a.txt", "/tmp/out.json", SourceFormat::Flat)
            .rooted_at(Path::new("/data"));
        assert_eq!(config.input, PathBuf::from("/data/raw/a.txt"));
        assert_eq!(config.output, PathBuf::from("/tmp/out.json"));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ExtractorConfig = serde_json::from_str(
            r#"{"input":"in.txt","output":"out.json","format":{"kind":"dictionary","header_lines":5}}"#,
        )
        .unwrap();
        assert_eq!(config.format, SourceFormat::Dictionary { header_lines: 5 });
        assert_eq!(config.json, JsonStyle::default());
        assert!(config.create_dirs);
    }
}
