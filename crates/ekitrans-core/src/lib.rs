//! Core domain types, ports and services for ekitrans.
//!
//! This crate owns the translation resilience layer: the credential pool,
//! the shared rotation cursor and the orchestrator that turns N unreliable,
//! rate-limited credentials into one dependable translation call. Storage and
//! the external model are reached only through the traits in [`ports`].

pub mod config;
pub mod credentials;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod prompt;
pub mod rotation;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::TranslatorSettings;
pub use credentials::{
    CREDENTIAL_ENV_PREFIX, Credential, CredentialPool, CredentialSource, DEFAULT_CREDENTIAL_SLOTS,
    EnvCredentialSource, StaticCredentialSource,
};
pub use domain::{
    ExportEntry, HistoryPage, HistoryQuery, NewTranslation, Pagination, RatingUpdate,
    TranslationRecord, TranslationResult,
};
pub use paths::{PathError, database_path};
pub use ports::{
    CoreError, ModelInvoker, RepositoryError, TranslateError, TranslationRepository,
    UpstreamCallError,
};
pub use rotation::{RotationCursor, RotationSelector};
pub use services::{
    AppCore, DEFAULT_RETRY_DELAY, EXPORT_MIN_RATING, ResilientTranslator, RetryPolicy,
    ReviewService, TranslationService, export_filename,
};
