//! `traitdoc check` — fail when generated documentation is stale.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use traitdoc_sync::diff_all;

use super::ConfigArgs;

/// Arguments for `traitdoc check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.load()?;
        let diffs = diff_all(&config).context("check failed")?;

        if diffs.is_empty() {
            println!("{} documentation is up to date", "✓".green());
            return Ok(());
        }

        for diff in &diffs {
            println!("  {}  {}", "✗".red(), diff.path.display());
        }
        bail!(
            "{} document(s) out of date; run `traitdoc generate`",
            diffs.len()
        )
    }
}
