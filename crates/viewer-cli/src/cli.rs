//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Web viewer for agent task-run transcripts
#[derive(Parser, Debug)]
#[command(name = "village-viewer")]
#[command(version)]
#[command(about = "Render agent task-run transcripts to HTML")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a saved state snapshot to HTML
    Render {
        /// Snapshot path (`{"history": [...]}` or a bare history array)
        snapshot: PathBuf,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Fetch /state from a running agent and render it
    Fetch {
        /// Base URL of the agent's UI server
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        url: String,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Serve the rendered transcript over HTTP
    Serve {
        /// Path of the state snapshot to serve
        #[arg(long)]
        state: PathBuf,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}
