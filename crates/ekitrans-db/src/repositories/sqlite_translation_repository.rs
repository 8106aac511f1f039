//! `SQLite` implementation of the `TranslationRepository` trait.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use ekitrans_core::{
    HistoryQuery, NewTranslation, RatingUpdate, RepositoryError, TranslationRecord,
    TranslationRepository,
};

use super::row_mappers::{
    TRANSLATION_SELECT_COLUMNS, format_timestamp, row_to_translation, storage_error,
};

/// Newest first; rowid breaks ties between records created in the same microsecond.
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, rowid DESC";

/// `SQLite` implementation of the `TranslationRepository` trait.
pub struct SqliteTranslationRepository {
    pool: SqlitePool,
}

impl SqliteTranslationRepository {
    /// Create a new `SQLite` translation repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TranslationRepository for SqliteTranslationRepository {
    async fn insert(&self, new: NewTranslation) -> Result<TranslationRecord, RepositoryError> {
        // Stored with microsecond precision.
        let now = Utc::now().trunc_subsecs(6);
        let record = TranslationRecord {
            id: Uuid::new_v4().to_string(),
            japanese: new.japanese,
            english: new.english,
            rating: None,
            comment: String::new(),
            created_at: now,
            updated_at: now,
        };
        let stamp = format_timestamp(now);

        sqlx::query(
            "INSERT INTO translations (id, japanese, english, rating, comment, created_at, updated_at)
             VALUES (?, ?, ?, NULL, '', ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.japanese)
        .bind(&record.english)
        .bind(&stamp)
        .bind(&stamp)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        tracing::debug!(target: "ekitrans.db", id = %record.id, "Translation saved");
        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<TranslationRecord>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {TRANSLATION_SELECT_COLUMNS} FROM translations WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(row_to_translation).transpose()
    }

    async fn update_rating(
        &self,
        id: &str,
        update: RatingUpdate,
    ) -> Result<Option<TranslationRecord>, RepositoryError> {
        let result = sqlx::query(
            "UPDATE translations SET rating = ?, comment = ?, updated_at = ? WHERE id = ?",
        )
        .bind(i64::from(update.rating))
        .bind(&update.comment)
        .bind(format_timestamp(Utc::now()))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get(id).await
    }

    async fn list(
        &self,
        query: &HistoryQuery,
    ) -> Result<(Vec<TranslationRecord>, u64), RepositoryError> {
        let filter = if query.min_rating.is_some() {
            "WHERE rating >= ?"
        } else {
            ""
        };

        let count_sql = format!("SELECT COUNT(*) FROM translations {filter}");
        let mut count = sqlx::query_scalar::<sqlx::Sqlite, i64>(&count_sql);
        if let Some(min) = query.min_rating {
            count = count.bind(min);
        }
        let total = count.fetch_one(&self.pool).await.map_err(storage_error)?;

        let sql = format!(
            "SELECT {TRANSLATION_SELECT_COLUMNS} FROM translations {filter} {NEWEST_FIRST} LIMIT ? OFFSET ?"
        );
        let mut select = sqlx::query(&sql);
        if let Some(min) = query.min_rating {
            select = select.bind(min);
        }
        let rows = select
            .bind(i64::from(query.limit))
            .bind(i64::try_from(query.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        let translations = rows
            .iter()
            .map(row_to_translation)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((translations, u64::try_from(total).unwrap_or_default()))
    }

    async fn list_rated_at_least(
        &self,
        min_rating: u8,
    ) -> Result<Vec<TranslationRecord>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {TRANSLATION_SELECT_COLUMNS} FROM translations WHERE rating >= ? {NEWEST_FIRST}"
        ))
        .bind(i64::from(min_rating))
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.iter().map(row_to_translation).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn repo() -> SqliteTranslationRepository {
        SqliteTranslationRepository::new(setup_test_database().await.unwrap())
    }

    async fn seed(repo: &SqliteTranslationRepository, n: usize) -> Vec<TranslationRecord> {
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let new = NewTranslation::new(&format!("アナウンス{i}"), &format!("Announcement {i}"));
            out.push(repo.insert(new).await.unwrap());
        }
        out
    }

    fn rating(value: u8) -> RatingUpdate {
        RatingUpdate {
            rating: value,
            comment: String::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = repo().await;
        let created = repo
            .insert(NewTranslation::new(" 次は渋谷 ", "Next is Shibuya."))
            .await
            .unwrap();

        assert_eq!(created.id.len(), 36);
        assert_eq!(created.japanese, "次は渋谷");
        assert_eq!(created.rating, None);
        assert_eq!(created.comment, "");

        let loaded = repo.get(&created.id).await.unwrap().unwrap();
        assert_eq!(loaded.japanese, created.japanese);
        assert_eq!(loaded.english, created.english);
        assert_eq!(loaded.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        assert!(repo().await.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_rating() {
        let repo = repo().await;
        let created = seed(&repo, 1).await.remove(0);

        let updated = repo
            .update_rating(
                &created.id,
                RatingUpdate {
                    rating: 4,
                    comment: "natural".to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.rating, Some(4));
        assert_eq!(updated.comment, "natural");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_rating_unknown_id() {
        let repo = repo().await;
        assert!(repo.update_rating("missing", rating(3)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_out_of_range_rating_is_constraint_error() {
        let repo = repo().await;
        let created = seed(&repo, 1).await.remove(0);
        let err = repo.update_rating(&created.id, rating(7)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_list_paginates_newest_first() {
        let repo = repo().await;
        let created = seed(&repo, 5).await;

        let (page, total) = repo.list(&HistoryQuery::new(Some(1), Some(2), None)).await.unwrap();
        assert_eq!(total, 5);
        let ids: Vec<&str> = page.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![created[4].id.as_str(), created[3].id.as_str()]);

        let (page, _) = repo.list(&HistoryQuery::new(Some(3), Some(2), None)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, created[0].id);

        let (page, total) = repo.list(&HistoryQuery::new(Some(9), Some(2), None)).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(total, 5);
    }

    #[tokio::test]
    async fn test_list_min_rating_filter() {
        let repo = repo().await;
        let created = seed(&repo, 4).await;
        repo.update_rating(&created[0].id, rating(2)).await.unwrap();
        repo.update_rating(&created[1].id, rating(3)).await.unwrap();
        repo.update_rating(&created[2].id, rating(5)).await.unwrap();

        let (page, total) = repo.list(&HistoryQuery::new(None, None, Some(3))).await.unwrap();
        assert_eq!(total, 2);
        let ids: Vec<&str> = page.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![created[2].id.as_str(), created[1].id.as_str()]);
    }

    #[tokio::test]
    async fn test_list_rated_at_least() {
        let repo = repo().await;
        let created = seed(&repo, 5).await;
        for (record, value) in created.iter().zip([4, 5, 3, 4, 1]) {
            repo.update_rating(&record.id, rating(value)).await.unwrap();
        }

        let high = repo.list_rated_at_least(4).await.unwrap();
        let ids: Vec<&str> = high.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                created[3].id.as_str(),
                created[1].id.as_str(),
                created[0].id.as_str()
            ]
        );
    }
}
