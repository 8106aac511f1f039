//! `SQLite` persistence for ekitrans.
//!
//! Implements the core `TranslationRepository` port on top of `sqlx` and
//! provides the schema setup plus a small factory for composition roots.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::CoreFactory;

pub use repositories::SqliteTranslationRepository;

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
