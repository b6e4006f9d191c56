//! traitdoc core library: domain types, metadata extraction, trait catalog,
//! configuration, errors.
//!
//! - [`types`]: schema description and extracted metadata
//! - [`metadata`]: trait ID, description and flattened field extraction
//! - [`registry`]: [`TraitRegistry`] and the YAML-backed [`TraitCatalog`]
//! - [`config`]: `traitdoc.yaml`
//! - [`error`]: [`MetadataError`], [`CatalogError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod metadata;
pub mod registry;
pub mod types;

pub use config::DocConfig;
pub use error::{CatalogError, ConfigError, MetadataError};
pub use metadata::MetadataExtractor;
pub use registry::{TraitCatalog, TraitRegistry};
pub use types::{FieldMetadata, FieldSchema, SchemaSet, TraitId, TraitMetadata, TypeSchema};
