//! `traitdoc generate` — compose every trait page and the navigation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use traitdoc_sync::{pipeline, Mode, RunReport, WriteResult};

use super::ConfigArgs;

/// Arguments for `traitdoc generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.load()?;
        let mode = if self.dry_run { Mode::DryRun } else { Mode::Write };
        let report = pipeline::run(&config, mode).context("generation failed")?;
        print_results(&report, self.dry_run);
        Ok(())
    }
}

fn print_results(report: &RunReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    if report.pages.is_empty() {
        println!("{prefix}{} no traits found in schemas", "!".yellow());
    } else {
        println!(
            "{prefix}{} {} trait page(s), {} document(s) changed",
            "✓".green(),
            report.pages.len(),
            report.changed_count(),
        );
    }

    for r in &report.writes {
        let marker = match r {
            WriteResult::Written { changed: true, .. } => "✎",
            WriteResult::WouldWrite { changed: true, .. } => "~",
            _ => "·",
        };
        println!("  {marker}  {}", r.path().display());
    }
}
