//! Line-addressed documents and their on-disk store.
//!
//! Text is split on `\n` after folding CRLF to LF. On the way back out,
//! trailing empty lines are dropped and every remaining line ends with `\n`.
//! Interior blank lines are never touched.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use traitdoc_renderer::{markers::TITLE_PREFIX, Region};

use crate::error::{io_err, SyncError};
use crate::splice;

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// The full content of one file as an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        let normalized = normalize_line_endings(text);
        Document {
            lines: normalized.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line is a document title (`= ...`).
    pub fn has_title(&self) -> bool {
        self.lines.iter().any(|l| l.starts_with(TITLE_PREFIX))
    }

    pub fn prepend(&mut self, lines: Vec<String>) {
        self.lines.splice(0..0, lines);
    }

    pub fn replace_region(&mut self, region: Region, content: &[String]) {
        self.lines = splice::replace(&self.lines, region.start, region.end, content);
    }

    /// Serialize for writing.
    pub fn render(&self) -> String {
        let keep = self
            .lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);
        let mut out = String::new();
        for line in &self.lines[..keep] {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Read `path` as stored, creating it (and its parent directories) empty
/// when absent. Line endings are folded later by [`Document::parse`].
pub fn read_or_create(path: &Path) -> Result<String, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
            }
            std::fs::write(path, "").map_err(|e| io_err(path, e))?;
            tracing::debug!("created: {}", path.display());
            Ok(String::new())
        }
        Err(err) => Err(io_err(path, err)),
    }
}

/// Read `path` as stored, without side effects; a missing file reads as empty.
pub fn read_or_empty(path: &Path) -> Result<String, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}

/// Replace the content of `path` through `<path>.traitdoc.tmp` and a rename.
pub fn persist(path: &Path, content: &str) -> Result<(), SyncError> {
    let tmp = PathBuf::from(format!("{}.traitdoc.tmp", path.display()));
    persist_with_tmp(path, content, &tmp)
}

fn persist_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), SyncError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
