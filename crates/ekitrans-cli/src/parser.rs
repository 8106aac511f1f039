//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Translate Japanese railway announcements into English.
#[derive(Parser)]
#[command(name = "ekitrans")]
#[command(about = "Translate Japanese railway announcements into English")]
#[command(version)]
pub struct Cli {
    /// Use this database file instead of the default location
    #[arg(long = "database", global = true, env = "EKITRANS_DATABASE")]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
