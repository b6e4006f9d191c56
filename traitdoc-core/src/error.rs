//! Error types for traitdoc-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a schema type into [`TraitMetadata`].
///
/// Every variant is fatal for the type being documented: an eligible type
/// that cannot be described is a build-time defect, not something to skip.
///
/// [`TraitMetadata`]: crate::types::TraitMetadata
#[derive(Debug, Error)]
pub enum MetadataError {
    /// No `<tag>=<id>` directive on an eligible type.
    #[error("trait ID not found in type {type_name}")]
    MissingTraitId { type_name: String },

    /// The directive tag is present but not followed by a valid `=<id>`.
    #[error("unable to extract trait ID from tag line `{line}` in type {type_name}")]
    MalformedDirective { type_name: String, line: String },

    /// A flattened field points at a type the schema set does not know.
    #[error("type {type_name} flattens unknown type {target}")]
    UnknownType { type_name: String, target: String },

    /// A flattened field leads back to a type already being flattened.
    #[error("flatten cycle detected: {chain}")]
    FlattenCycle { chain: String },

    /// The configured trait tag could not be turned into a matcher.
    #[error("invalid trait tag {tag:?}: {source}")]
    InvalidTag {
        tag: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors from loading the trait catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying I/O failure while reading the catalog.
    #[error("I/O error reading catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error, with the catalog path for context.
    #[error("failed to parse trait catalog at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The catalog file did not exist at the expected path.
    #[error("trait catalog not found at {path}")]
    NotFound { path: PathBuf },
}

/// Errors from loading or writing `traitdoc.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML serialization error (write path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config not found at {path}")]
    NotFound { path: PathBuf },
}
