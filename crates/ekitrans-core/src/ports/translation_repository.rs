//! Translation repository port definition.
//!
//! This port defines the interface for persisting translations and the
//! review data attached to them.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{HistoryQuery, NewTranslation, RatingUpdate, TranslationRecord};

/// Port for translation persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Listings are always ordered newest first
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Store a new translation and return the created record.
    async fn insert(&self, new: NewTranslation) -> Result<TranslationRecord, RepositoryError>;

    /// Get a translation by ID.
    async fn get(&self, id: &str) -> Result<Option<TranslationRecord>, RepositoryError>;

    /// Set rating and comment. Returns `None` when the ID is unknown.
    async fn update_rating(
        &self,
        id: &str,
        update: RatingUpdate,
    ) -> Result<Option<TranslationRecord>, RepositoryError>;

    /// One page of translations plus the total number of matching records.
    async fn list(
        &self,
        query: &HistoryQuery,
    ) -> Result<(Vec<TranslationRecord>, u64), RepositoryError>;

    /// All translations rated at least `min_rating`.
    async fn list_rated_at_least(
        &self,
        min_rating: u8,
    ) -> Result<Vec<TranslationRecord>, RepositoryError>;
}
