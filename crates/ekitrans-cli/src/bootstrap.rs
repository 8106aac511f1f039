//! CLI bootstrap - the composition root.
//!
//! Command handlers receive the fully-composed `AppCore` and delegate work
//! to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use ekitrans_core::paths::database_path;
use ekitrans_core::{AppCore, EnvCredentialSource, TranslatorSettings};
use ekitrans_db::{CoreFactory, setup_database};
use ekitrans_gemini::{GeminiConfig, GeminiInvoker};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Use `database` when given, otherwise the default location.
    pub fn resolve(database: Option<PathBuf>) -> Result<Self> {
        let database_path = match database {
            Some(path) => path,
            None => database_path()?,
        };
        Ok(Self { database_path })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub core: Arc<AppCore>,
}

impl CliContext {
    pub const fn new(core: Arc<AppCore>) -> Self {
        Self { core }
    }
}

/// Wire the database, credentials and the Gemini client.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    tracing::debug!(
        target: "ekitrans.db",
        database_path = %config.database_path.display(),
        "CLI bootstrap resolved paths"
    );
    let pool = setup_database(&config.database_path).await?;
    let settings = TranslatorSettings::from_env()?;
    let invoker = GeminiInvoker::new(GeminiConfig::from_env())?;

    let core = CoreFactory::build_app_core(
        pool,
        Arc::new(EnvCredentialSource::new(settings.credential_slots)),
        Arc::new(invoker),
        settings,
    );
    Ok(CliContext::new(Arc::new(core)))
}
