//! `traitdoc diff` — show unified diffs for what generate would write.

use anyhow::{Context, Result};
use clap::Args;

use traitdoc_sync::diff_all;

use super::ConfigArgs;

/// Arguments for `traitdoc diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.load()?;
        let diffs = diff_all(&config).context("diff failed")?;

        if diffs.is_empty() {
            println!("No differences.");
            return Ok(());
        }

        for diff in diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }
        Ok(())
    }
}
