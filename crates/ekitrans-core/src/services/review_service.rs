//! Review operations on stored translations: rating, history and export.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{ExportEntry, HistoryPage, HistoryQuery, Pagination, TranslationRecord};
use crate::ports::{CoreError, TranslationRepository};
use crate::validation::validate_rating;

/// Lowest rating included in the export.
pub const EXPORT_MIN_RATING: u8 = 4;

/// Message returned when a translation ID is unknown.
pub const TRANSLATION_NOT_FOUND: &str = "Translation not found";

/// File name offered for an export made on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("high_rated_translations_{}.json", date.format("%Y-%m-%d"))
}

/// Thin orchestrator over the translation repository for review workflows.
pub struct ReviewService {
    repo: Arc<dyn TranslationRepository>,
}

impl ReviewService {
    pub fn new(repo: Arc<dyn TranslationRepository>) -> Self {
        Self { repo }
    }

    /// Rate a translation and attach an optional comment.
    pub async fn rate(
        &self,
        id: &str,
        rating: Option<i64>,
        comment: Option<String>,
    ) -> Result<TranslationRecord, CoreError> {
        let update = validate_rating(rating, comment)?;
        self.repo
            .update_rating(id, update)
            .await?
            .ok_or_else(|| CoreError::NotFound(TRANSLATION_NOT_FOUND.to_string()))
    }

    /// One page of history, newest first.
    pub async fn history(&self, query: HistoryQuery) -> Result<HistoryPage, CoreError> {
        let (translations, total) = self.repo.list(&query).await?;
        Ok(HistoryPage {
            translations,
            pagination: Pagination::new(&query, total),
        })
    }

    /// Every translation rated [`EXPORT_MIN_RATING`] or higher, newest first.
    pub async fn export(&self) -> Result<Vec<ExportEntry>, CoreError> {
        let records = self.repo.list_rated_at_least(EXPORT_MIN_RATING).await?;
        tracing::debug!(target: "ekitrans.db", count = records.len(), "Exporting rated translations");
        Ok(records.into_iter().map(ExportEntry::from).collect())
    }
}
