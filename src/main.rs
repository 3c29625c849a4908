//! sweep - ordered target-list cleanup CLI

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "sweep")]
#[command(author, version, about = "sweep - delete an ordered list of target files")]
struct Cli {
    /// Target file(s) to delete, in order
    paths: Vec<PathBuf>,

    /// TOML manifest listing targets (defaults to ./sweep.toml, then ~/.sweep/targets.toml)
    #[arg(long, env = "SWEEP_MANIFEST")]
    manifest: Option<PathBuf>,

    /// Show what would happen without making changes
    #[arg(long)]
    dry_run: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so they can never interleave with the
    // line-oriented stdout contract.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    cmd::clean::clean(&cli.paths, cli.manifest.as_deref(), cli.dry_run, cli.quiet)
}
