//! `traitdoc init [--path traitdoc.yaml] [--force]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use traitdoc_core::{config::DEFAULT_CONFIG_FILE, DocConfig};

/// Write a config file populated with the defaults.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the config.
    #[arg(long, short = 'p', default_value = DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,

    /// Overwrite an existing config.
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        DocConfig::default()
            .save_at(&self.path, self.force)
            .with_context(|| format!("failed to write '{}'", self.path.display()))?;
        println!("✓ Wrote {}", self.path.display());
        println!("  Edit schemas/catalog paths, then run `traitdoc generate`.");
        Ok(())
    }
}
