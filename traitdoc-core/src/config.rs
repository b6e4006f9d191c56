//! `traitdoc.yaml`: documentation layout and input locations.
//!
//! Relative paths are resolved against the directory holding the config
//! file (see [`DocConfig::resolve_relative_to`]), so a config checked into a
//! repository works from any working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::metadata::DEFAULT_TRAIT_TAG;
use crate::types::TraitId;

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "traitdoc.yaml";

fn default_page_extension() -> String {
    "adoc".to_string()
}

fn default_trait_tag() -> String {
    DEFAULT_TRAIT_TAG.to_string()
}

/// Where documents live and where the inputs come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocConfig {
    /// Documentation root.
    pub doc_dir: PathBuf,
    /// Trait page directory, relative to `doc_dir`.
    pub trait_path: PathBuf,
    /// Navigation document, relative to `doc_dir`.
    pub nav_path: PathBuf,
    /// Optional page-list document, relative to `doc_dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_path: Option<PathBuf>,
    #[serde(default = "default_page_extension")]
    pub page_extension: String,
    #[serde(default = "default_trait_tag")]
    pub trait_tag: String,
    /// Schema file or directory of schema files.
    pub schemas: PathBuf,
    /// Trait catalog YAML.
    pub catalog: PathBuf,
    /// Optional directory of `.tera` overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            doc_dir: PathBuf::from("docs"),
            trait_path: PathBuf::from("modules/traits/pages"),
            nav_path: PathBuf::from("modules/ROOT/nav.adoc"),
            list_path: None,
            page_extension: default_page_extension(),
            trait_tag: default_trait_tag(),
            schemas: PathBuf::from("schemas"),
            catalog: PathBuf::from("catalog.yaml"),
            template_dir: None,
        }
    }
}

impl DocConfig {
    /// Load and resolve a config file.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: DocConfig =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_relative_to(base))
    }

    /// Write the config as YAML, refusing to clobber unless `force`.
    pub fn save_at(&self, path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "config already exists; pass --force to overwrite",
                ),
            });
        }
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Anchor relative `doc_dir`, `schemas`, `catalog` and `template_dir` at `base`.
    ///
    /// `trait_path`, `nav_path` and `list_path` stay relative to `doc_dir`.
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        let anchor = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        self.doc_dir = anchor(self.doc_dir);
        self.schemas = anchor(self.schemas);
        self.catalog = anchor(self.catalog);
        self.template_dir = self.template_dir.map(anchor);
        self
    }

    /// `<doc_dir>/<trait_path>`
    pub fn trait_dir(&self) -> PathBuf {
        self.doc_dir.join(&self.trait_path)
    }

    /// `<id>.<ext>`, the page file name recorded in the navigation index.
    pub fn page_file_name(&self, id: &TraitId) -> String {
        format!("{}.{}", id, self.page_extension)
    }

    /// `<doc_dir>/<trait_path>/<id>.<ext>`
    pub fn page_path(&self, id: &TraitId) -> PathBuf {
        self.trait_dir().join(self.page_file_name(id))
    }

    /// `<doc_dir>/<nav_path>`
    pub fn nav_file(&self) -> PathBuf {
        self.doc_dir.join(&self.nav_path)
    }

    /// `<doc_dir>/<list_path>`, if a page list is configured.
    pub fn list_file(&self) -> Option<PathBuf> {
        self.list_path.as_ref().map(|p| self.doc_dir.join(p))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
