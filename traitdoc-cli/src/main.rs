//! traitdoc: keep trait reference pages in sync with their schemas.
//!
//! # Usage
//!
//! ```text
//! traitdoc generate [--config traitdoc.yaml] [--dry-run] [--doc-dir ...] [--schemas ...]
//! traitdoc diff     [--config traitdoc.yaml]
//! traitdoc check    [--config traitdoc.yaml]
//! traitdoc list     [--config traitdoc.yaml] [--json]
//! traitdoc init     [--path traitdoc.yaml] [--force]
//! ```

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use commands::{
    check::CheckArgs, diff::DiffArgs, generate::GenerateArgs, init::InitArgs, list::ListArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "traitdoc",
    version,
    about = "Generate and maintain trait reference documentation",
    long_about = None,
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Regenerate every trait page and the navigation.
    Generate(GenerateArgs),

    /// Show a unified diff of what generate would change.
    Diff(DiffArgs),

    /// Exit non-zero when generated documentation is out of date.
    Check(CheckArgs),

    /// List the documented traits.
    List(ListArgs),

    /// Write a starter traitdoc.yaml.
    Init(InitArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Generate(args) => args.run(),
        Commands::Diff(args) => args.run(),
        Commands::Check(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Init(args) => args.run(),
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
