//! Document sources.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tokbench_types::{HarnessError, Result};

/// Where the raw document comes from.
pub trait DocumentSource {
    /// Loads the whole document.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::ResourceNotFound` if the document is absent.
    fn load_document(&self) -> Result<String>;
}

/// Reads a UTF-8 file from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for `path`. Nothing is read until
    /// [`load_document`](DocumentSource::load_document).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn load_document(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => HarnessError::ResourceNotFound(self.path.clone()),
            io::ErrorKind::InvalidData => HarnessError::InvalidUtf8(self.path.clone()),
            _ => HarnessError::Io(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Alice was beginning to get very tired.").unwrap();

        let text = FileSource::new(file.path()).load_document().unwrap();
        assert_eq!(text, "Alice was beginning to get very tired.");
    }

    #[test]
    fn missing_file_is_resource_not_found() {
        let source = FileSource::new("/nonexistent/alice29.txt");
        match source.load_document() {
            Err(HarnessError::ResourceNotFound(path)) => {
                assert_eq!(path, PathBuf::from("/nonexistent/alice29.txt"))
            }
            other => panic!("expected ResourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = FileSource::new(file.path()).load_document().unwrap_err();
        assert!(matches!(err, HarnessError::InvalidUtf8(_)));
    }
}
