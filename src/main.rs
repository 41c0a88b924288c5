use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vellum::app::AppContext;
use vellum::cli::{commands, Cli, Commands};
use vellum::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(config, cli.api_url)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tips { save } => {
            commands::generate_tips(&ctx, save.as_deref()).await?;
        }
        Commands::Topic { topic, save } => {
            commands::generate_topic(&ctx, &topic, save.as_deref()).await?;
        }
        Commands::Tui => {
            vellum::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
