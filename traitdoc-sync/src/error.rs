//! Error types for traitdoc-sync.

use std::path::PathBuf;

use thiserror::Error;

use traitdoc_core::{CatalogError, ConfigError, MetadataError, TraitId};
use traitdoc_renderer::RenderError;
use traitdoc_schema::SchemaError;

/// All errors that can arise while generating documentation.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Two eligible types declare the same trait ID and would share one page.
    #[error("trait '{id}' is declared by both {first} and {second}")]
    DuplicateTrait {
        id: TraitId,
        first: String,
        second: String,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
