//! Schema source for `traitdoc-schema`.
//!
//! `load_schemas(path)` reads explicit schema descriptions (types, their
//! annotation lines and tagged fields) from a YAML or JSON file, or from every
//! such file in a directory, and returns them as one [`SchemaSet`]. Files in a
//! directory are read in file-name order so discovery order is stable.
//!
//! ```text
//! types:
//!   - name: TimerTrait
//!     comments: ["The timer trait ...", "+trait-id=timer"]
//!     fields:
//!       - property: period
//!         type: "*int64"
//!         comments: ["The period, in milliseconds."]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use traitdoc_core::{SchemaSet, TypeSchema};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Serialization format of a schema file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Yaml,
    Json,
}

impl SchemaFormat {
    /// Format for `path`, or `None` when the extension is not a schema format.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Some(SchemaFormat::Yaml),
            Some("json") => Some(SchemaFormat::Json),
            _ => None,
        }
    }
}

/// Errors from loading schema descriptions.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("unsupported schema file '{path}', expected .yaml, .yml or .json")]
    UnsupportedFormat { path: PathBuf },

    #[error("type {name} declared twice (second declaration in {path})")]
    DuplicateType { name: String, path: PathBuf },

    #[error("schema source not found at {path}")]
    NotFound { path: PathBuf },
}

#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default)]
    types: Vec<TypeSchema>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load every type described at `path` (a schema file or a directory of them).
pub fn load_schemas(path: &Path) -> Result<SchemaSet, SchemaError> {
    if !path.exists() {
        return Err(SchemaError::NotFound { path: path.to_path_buf() });
    }

    let files = if path.is_dir() {
        schema_files_in(path)?
    } else {
        if SchemaFormat::from_path(path).is_none() {
            return Err(SchemaError::UnsupportedFormat { path: path.to_path_buf() });
        }
        vec![path.to_path_buf()]
    };

    let mut set = SchemaSet::new();
    for file in files {
        for schema in parse_file(&file)? {
            set.insert(schema).map_err(|rejected| SchemaError::DuplicateType {
                name: rejected.name,
                path: file.clone(),
            })?;
        }
    }
    Ok(set)
}

/// Parse a single schema document from `content`.
pub fn parse_str(
    content: &str,
    format: SchemaFormat,
    origin: &Path,
) -> Result<Vec<TypeSchema>, SchemaError> {
    let parsed: Result<SchemaFile, String> = match format {
        SchemaFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        SchemaFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };
    parsed
        .map(|f| f.types)
        .map_err(|message| SchemaError::ParseError { path: origin.to_path_buf(), message })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn io_err(path: &Path, source: std::io::Error) -> SchemaError {
    SchemaError::Io { path: path.to_path_buf(), source }
}

fn schema_files_in(dir: &Path) -> Result<Vec<PathBuf>, SchemaError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| io_err(dir, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && SchemaFormat::from_path(p).is_some())
        .collect();
    files.sort();
    Ok(files)
}

fn parse_file(path: &Path) -> Result<Vec<TypeSchema>, SchemaError> {
    let Some(format) = SchemaFormat::from_path(path) else {
        return Err(SchemaError::UnsupportedFormat { path: path.to_path_buf() });
    };
    let content = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    parse_str(&content, format, path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
