//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on (defaults to EKITRANS_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Translate one announcement and record it
    Translate {
        /// Japanese announcement text
        text: String,
    },

    /// Write translations rated 4 or higher to a JSON file
    Export {
        /// Output file (defaults to high_rated_translations_<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show translation history, newest first
    History {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Entries per page (1-100)
        #[arg(long)]
        limit: Option<u32>,

        /// Only show translations rated at least this
        #[arg(long = "min-rating")]
        min_rating: Option<i64>,
    },
}
