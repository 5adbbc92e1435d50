mod cli_app;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli_app::{CliApp, Command};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "GameCube to N64 button remapper")]
struct Cli {
    /// Mapping document to read and write
    #[arg(long, short, global = true, env = "GC2N64_MAPPING")]
    mapping: Option<PathBuf>,
    /// Log mapping changes and file access
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    CliApp::new(cli.mapping).run(cli.command)
}
