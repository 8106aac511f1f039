//! Composition utilities for building `AppCore` with a `SQLite` backend.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use ekitrans_core::{AppCore, CredentialSource, ModelInvoker, TranslatorSettings};

use crate::repositories::SqliteTranslationRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a translation repository from a pool.
    pub fn translation_repository(pool: SqlitePool) -> Arc<SqliteTranslationRepository> {
        Arc::new(SqliteTranslationRepository::new(pool))
    }

    /// Build a complete `AppCore` from a pool, a credential source and a
    /// model invoker.
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let core = CoreFactory::build_app_core(
    ///     pool,
    ///     Arc::new(EnvCredentialSource::default()),
    ///     Arc::new(GeminiInvoker::new(GeminiConfig::from_env())?),
    ///     TranslatorSettings::from_env()?,
    /// );
    /// ```
    pub fn build_app_core(
        pool: SqlitePool,
        credentials: Arc<dyn CredentialSource>,
        invoker: Arc<dyn ModelInvoker>,
        settings: TranslatorSettings,
    ) -> AppCore {
        AppCore::new(
            credentials,
            invoker,
            Self::translation_repository(pool),
            settings,
        )
    }
}
