//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, SecondsFormat, Utc};
use ekitrans_core::{RepositoryError, TranslationRecord};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for translation queries.
pub const TRANSLATION_SELECT_COLUMNS: &str =
    "id, japanese, english, rating, comment, created_at, updated_at";

/// Timestamps are stored as fixed-width RFC 3339 so they sort as text.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("bad timestamp {raw:?}: {e}")))
}

/// Map `sqlx` errors, keeping constraint violations distinguishable.
pub fn storage_error(e: sqlx::Error) -> RepositoryError {
    match e.as_database_error() {
        Some(db) if db.is_check_violation() || db.is_unique_violation() => {
            RepositoryError::Constraint(db.message().to_string())
        }
        _ => RepositoryError::Storage(e.to_string()),
    }
}

/// Parse a database row into a `TranslationRecord`.
pub fn row_to_translation(row: &SqliteRow) -> Result<TranslationRecord, RepositoryError> {
    let rating = row
        .try_get::<Option<i64>, _>("rating")
        .map_err(storage_error)?
        .map(u8::try_from)
        .transpose()
        .map_err(|e| RepositoryError::Serialization(format!("rating out of range: {e}")))?;

    let created_at: String = row.try_get("created_at").map_err(storage_error)?;
    let updated_at: String = row.try_get("updated_at").map_err(storage_error)?;

    Ok(TranslationRecord {
        id: row.try_get("id").map_err(storage_error)?,
        japanese: row.try_get("japanese").map_err(storage_error)?,
        english: row.try_get("english").map_err(storage_error)?,
        rating,
        comment: row.try_get("comment").map_err(storage_error)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
