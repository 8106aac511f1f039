//! CLI entry point.
//!
//! `serve` hands over to the axum bootstrap; every other command is wired
//! through [`ekitrans_cli::bootstrap`].

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use ekitrans_axum::ServerConfig;
use ekitrans_cli::{Cli, CliConfig, CliContext, Commands, bootstrap, handlers};
use ekitrans_core::HistoryQuery;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve { port } => {
            let mut config = ServerConfig::from_env()?;
            if let Some(database) = cli.database {
                config = config.with_database_path(database);
            }
            handlers::serve::execute(port, config).await?;
        }
        Commands::Translate { text } => {
            let ctx = context(cli.database).await?;
            handlers::translate::execute(&ctx, &text).await?;
        }
        Commands::Export { output } => {
            let ctx = context(cli.database).await?;
            handlers::export::execute(&ctx, output.as_deref()).await?;
        }
        Commands::History {
            page,
            limit,
            min_rating,
        } => {
            let ctx = context(cli.database).await?;
            handlers::history::execute(&ctx, HistoryQuery::new(page, limit, min_rating)).await?;
        }
    }

    Ok(())
}

async fn context(database: Option<PathBuf>) -> anyhow::Result<CliContext> {
    bootstrap(CliConfig::resolve(database)?).await
}
