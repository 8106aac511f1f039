//! Command-line interface for ekitrans.
//!
//! `serve` runs the HTTP API; the other subcommands use the same core
//! services directly against the local database.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use parser::Cli;
