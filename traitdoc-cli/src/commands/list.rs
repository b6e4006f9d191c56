//! `traitdoc list` — the traits the schemas declare.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use traitdoc_core::TraitRegistry;
use traitdoc_sync::pipeline;

use super::ConfigArgs;

/// Arguments for `traitdoc list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TraitRow {
    id: String,
    source: String,
    page: String,
    profiles: Vec<String>,
    platform: bool,
    fields: Vec<String>,
}

#[derive(Tabled)]
struct TraitTableRow {
    #[tabled(rename = "trait")]
    id: String,
    #[tabled(rename = "page")]
    page: String,
    #[tabled(rename = "profiles")]
    profiles: String,
    #[tabled(rename = "platform")]
    platform: String,
    #[tabled(rename = "fields")]
    fields: usize,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.load()?;
        let inputs = pipeline::load_inputs(&config).context("failed to load inputs")?;
        let traits = pipeline::extract_all(&inputs).context("failed to extract traits")?;

        let mut rows: Vec<TraitRow> = traits
            .into_iter()
            .map(|t| TraitRow {
                page: config.page_file_name(&t.metadata.id),
                profiles: inputs.catalog.profiles_for(&t.metadata.id),
                platform: inputs.catalog.is_platform_trait(&t.metadata.id),
                fields: t.metadata.fields.iter().map(|f| f.key.clone()).collect(),
                id: t.metadata.id.to_string(),
                source: t.source,
            })
            .collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows).context("failed to serialize trait list")?
            );
            return Ok(());
        }

        if rows.is_empty() {
            println!("No traits found.");
            return Ok(());
        }

        let table_rows: Vec<TraitTableRow> = rows
            .into_iter()
            .map(|r| TraitTableRow {
                id: r.id,
                page: r.page,
                profiles: r.profiles.join(", "),
                platform: if r.platform { "yes" } else { "" }.to_string(),
                fields: r.fields.len(),
            })
            .collect();
        let mut table = Table::new(table_rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
