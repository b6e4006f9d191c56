//! Subcommands and the config flags they share.

pub mod check;
pub mod diff;
pub mod generate;
pub mod init;
pub mod list;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use traitdoc_core::{config::DEFAULT_CONFIG_FILE, DocConfig};

/// `--config` plus per-field overrides, flattened into every command that runs
/// a generation pass.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Config file. Defaults are used when `traitdoc.yaml` is absent.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Documentation root.
    #[arg(long, value_name = "DIR")]
    pub doc_dir: Option<PathBuf>,

    /// Trait page directory, relative to the documentation root.
    #[arg(long, value_name = "DIR")]
    pub trait_path: Option<PathBuf>,

    /// Navigation document, relative to the documentation root.
    #[arg(long, value_name = "FILE")]
    pub nav_path: Option<PathBuf>,

    /// Page-list document, relative to the documentation root.
    #[arg(long, value_name = "FILE")]
    pub list_path: Option<PathBuf>,

    /// Schema file or directory.
    #[arg(long, value_name = "PATH")]
    pub schemas: Option<PathBuf>,

    /// Trait catalog YAML.
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Directory of `.tera` template overrides.
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// Resolve the effective config: file (or defaults), then flag overrides.
    pub fn load(&self) -> Result<DocConfig> {
        let mut config = match &self.config {
            Some(path) => DocConfig::load_at(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    DocConfig::load_at(&default).context("failed to load traitdoc.yaml")?
                } else {
                    tracing::debug!("no {DEFAULT_CONFIG_FILE}; using defaults");
                    DocConfig::default()
                }
            }
        };

        if let Some(v) = &self.doc_dir {
            config.doc_dir = v.clone();
        }
        if let Some(v) = &self.trait_path {
            config.trait_path = v.clone();
        }
        if let Some(v) = &self.nav_path {
            config.nav_path = v.clone();
        }
        if let Some(v) = &self.list_path {
            config.list_path = Some(v.clone());
        }
        if let Some(v) = &self.schemas {
            config.schemas = v.clone();
        }
        if let Some(v) = &self.catalog {
            config.catalog = v.clone();
        }
        if let Some(v) = &self.template_dir {
            config.template_dir = Some(v.clone());
        }
        Ok(config)
    }
}
