//! Translation domain types.
//!
//! These types represent stored translations and the review operations on
//! them (rating, history listing, export).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of records per history page.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Upper bound for the history page size.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// A persisted translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub id: String,
    pub japanese: String,
    pub english: String,
    pub rating: Option<u8>,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new translation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTranslation {
    pub japanese: String,
    pub english: String,
}

impl NewTranslation {
    /// Build a record payload; both sides are stored trimmed.
    pub fn new(japanese: &str, english: &str) -> Self {
        Self {
            japanese: japanese.trim().to_string(),
            english: english.trim().to_string(),
        }
    }
}

/// A validated rating change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingUpdate {
    /// Star rating, always within `1..=5`.
    pub rating: u8,
    /// Reviewer comment; empty when none was given.
    pub comment: String,
}

/// Outcome of a translation request as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub english_translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_id: Option<String>,
}

/// Normalized history listing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    pub page: u32,
    pub limit: u32,
    pub min_rating: Option<i64>,
}

impl HistoryQuery {
    /// Build a query, applying defaults (page 1, limit 20) and clamping the
    /// page to at least 1 and the limit to `1..=100`.
    pub fn new(page: Option<u32>, limit: Option<u32>, min_rating: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .clamp(1, MAX_PAGE_LIMIT),
            min_rating,
        }
    }

    /// Number of records to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page).saturating_sub(1) * u64::from(self.limit)
    }
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

/// Pagination block of a history page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Compute the pagination block for `query` over `total` matching items.
    pub fn new(query: &HistoryQuery, total: u64) -> Self {
        let limit = u64::from(query.limit.max(1));
        Self {
            current_page: query.page,
            total_pages: total.div_ceil(limit),
            total_items: total,
            has_next: u64::from(query.page) * limit < total,
            has_prev: query.page > 1,
        }
    }
}

/// One page of translation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub translations: Vec<TranslationRecord>,
    pub pagination: Pagination,
}

/// Export projection of a highly rated translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub japanese: String,
    pub english: String,
}

impl From<TranslationRecord> for ExportEntry {
    fn from(record: TranslationRecord) -> Self {
        Self {
            japanese: record.japanese,
            english: record.english,
        }
    }
}
