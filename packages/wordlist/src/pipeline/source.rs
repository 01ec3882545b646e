//! Reading source word lists from disk.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, WordListError};

/// Read a whole source file as UTF-8.
///
/// The handle is closed before this returns. A missing file maps to
/// [`WordListError::MissingInput`]; invalid UTF-8 reports the 1-based line
/// of the first bad byte.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => WordListError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => WordListError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => {
            tracing::debug!(path = %path.display(), bytes = text.len(), "read source");
            Ok(text)
        }
        Err(err) => {
            let valid = &err.as_bytes()[..err.utf8_error().valid_up_to()];
            let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
            Err(WordListError::Decode {
                path: path.to_path_buf(),
                line,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_source(&dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingInput);
    }

    #[test]
    fn test_read_reports_decode_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, b"one\ntwo\nth\xffree\n").unwrap();

        match read_source(&path) {
            Err(WordListError::Decode { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_source(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeOrIo);
    }

    #[test]
    fn test_read_utf8_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ok.txt");
        fs::write(&path, "hello [hə'ləʊ]\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "hello [hə'ləʊ]\n");
    }
}
