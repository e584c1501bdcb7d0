//! village-viewer - render agent task-run transcripts to HTML

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render { snapshot, out } => commands::render::run(&snapshot, out.as_deref()),
        Command::Fetch { url, out } => commands::fetch::run(&url, out.as_deref()).await,
        Command::Serve { state, port } => commands::serve::run(state, port).await,
    }
}
