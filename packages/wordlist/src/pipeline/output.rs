//! Rendering word lists as JSON documents.

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, WordListError};
use crate::types::config::JsonStyle;
use crate::types::word_list::WordList;

/// Pretty formatter that escapes everything outside printable ASCII.
///
/// Non-BMP characters are written as UTF-16 surrogate pairs, so U+1F600
/// becomes `\ud83d\ude00`.
struct AsciiFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if (' '..='~').contains(&c) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize any value with the given style.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T, style: JsonStyle) -> Result<Vec<u8>> {
    let indent = vec![b' '; style.indent];
    let mut buf = Vec::new();

    if style.ascii_only {
        let formatter = AsciiFormatter::with_indent(&indent);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
    } else {
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
    }

    Ok(buf)
}

/// Render a word list as a JSON string.
pub fn render(words: &WordList, style: JsonStyle) -> Result<String> {
    let bytes = to_json_bytes(words, style)?;
    // Both formatters only ever emit UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write a word list to `path`.
///
/// The document is fully rendered before the file is opened, so a
/// serialization failure never leaves a partial file behind.
pub fn write_word_list(
    words: &WordList,
    path: &Path,
    style: JsonStyle,
    create_dirs: bool,
) -> Result<()> {
    let bytes = to_json_bytes(words, style)?;

    if create_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| WordListError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, bytes).map_err(|source| WordListError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), words = words.len(), "wrote word list");
    Ok(())
}
