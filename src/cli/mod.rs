pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vellum")]
#[command(about = "A terminal AI article generator", long_about = None)]
pub struct Cli {
    /// Base URL of the generation service (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a batch of random programming tips
    Tips {
        /// Write each generated article into this directory as markdown
        #[arg(long)]
        save: Option<std::path::PathBuf>,
    },
    /// Generate articles about a topic
    Topic {
        /// Topic to write about
        topic: String,

        /// Write each generated article into this directory as markdown
        #[arg(long)]
        save: Option<std::path::PathBuf>,
    },
    /// Launch the TUI
    Tui,
}
