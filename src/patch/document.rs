//! Whole-file line storage for config patching.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// A config file held in memory as an ordered sequence of lines.
///
/// Loaded fresh for every patch, mutated once, then saved. A save rewrites
/// the entire file; there is no partial-write guarantee beyond what the
/// underlying write call provides.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    path: PathBuf,
    lines: Vec<String>,
}

impl ConfigDocument {
    /// Load a config file, splitting it into lines.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path)?;
        let lines = content.lines().map(String::from).collect();
        Ok(Self { path, lines })
    }

    /// Build a document from lines already in memory (tests, previews).
    pub fn from_lines(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Write the full document back to its path, overwriting the file.
    ///
    /// Every non-empty document ends with a trailing newline; an empty
    /// document produces an empty file.
    pub fn save(&self) -> Result<()> {
        let mut content = self.lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the first line satisfying `pred`.
    pub fn position<P: FnMut(&str) -> bool>(&self, mut pred: P) -> Option<usize> {
        self.lines.iter().position(|l| pred(l))
    }

    pub(crate) fn replace_line(&mut self, index: usize, line: String) {
        self.lines[index] = line;
    }

    pub(crate) fn append_line(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Remove `[start, end)` as one unit.
    pub(crate) fn remove_range(&mut self, start: usize, end: usize) {
        self.lines.drain(start..end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_save_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rc");
        std::fs::write(&path, "a\nb\nc\n").unwrap();

        let doc = ConfigDocument::load(&path).unwrap();
        assert_eq!(doc.lines(), ["a", "b", "c"]);

        doc.save().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn save_empty_document_truncates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rc");
        std::fs::write(&path, "a\nb\n").unwrap();

        let doc = ConfigDocument::from_lines(&path, vec![]);
        doc.save().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = ConfigDocument::load(dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
