//! Translation request handling: validate, translate, record.

use std::sync::Arc;

use crate::domain::{NewTranslation, TranslationResult};
use crate::ports::{CoreError, TranslationRepository};
use crate::validation::validate_source_text;

use super::ResilientTranslator;
use super::resilient_translator::preview;

/// Validates a request, runs the resilient translator and records the result.
///
/// Recording is best effort: a storage failure is logged and the caller
/// still receives the translation, without an ID.
pub struct TranslationService {
    translator: Arc<ResilientTranslator>,
    repo: Arc<dyn TranslationRepository>,
}

impl TranslationService {
    pub fn new(translator: Arc<ResilientTranslator>, repo: Arc<dyn TranslationRepository>) -> Self {
        Self { translator, repo }
    }

    pub fn translator(&self) -> &ResilientTranslator {
        &self.translator
    }

    /// Translate `text` and persist the pair.
    ///
    /// `None` stands for a missing or non-string field in the request. The
    /// original text is echoed back exactly as received. An empty
    /// translation is returned but not stored.
    pub async fn translate(&self, text: Option<&str>) -> Result<TranslationResult, CoreError> {
        let text = validate_source_text(text)?;
        let english = self.translator.translate(text).await?;

        let translation_id = if english.is_empty() {
            tracing::info!(
                target: "ekitrans.translate",
                text = %preview(text),
                "Model returned no translation; not recording"
            );
            None
        } else {
            match self.repo.insert(NewTranslation::new(text, &english)).await {
                Ok(record) => Some(record.id),
                Err(e) => {
                    tracing::warn!(
                        target: "ekitrans.db",
                        error = %e,
                        "Failed to save translation"
                    );
                    None
                }
            }
        };

        Ok(TranslationResult {
            original_text: text.to_string(),
            english_translation: english,
            translation_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{Credential, StaticCredentialSource};
    use crate::domain::TranslationRecord;
    use crate::ports::{
        MockTranslationRepository, ModelInvoker, RepositoryError, TranslateError,
        UpstreamCallError,
    };
    use crate::services::RetryPolicy;
    use crate::validation::{TEXT_EMPTY, TEXT_REQUIRED};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::time::Duration;

    struct FixedInvoker(Result<&'static str, &'static str>);

    #[async_trait]
    impl ModelInvoker for FixedInvoker {
        async fn invoke(
            &self,
            _text: &str,
            credential: &Credential,
        ) -> Result<String, UpstreamCallError> {
            self.0
                .map(str::to_string)
                .map_err(|msg| UpstreamCallError::new(credential, msg))
        }
    }

    fn service(
        outcome: Result<&'static str, &'static str>,
        repo: MockTranslationRepository,
    ) -> TranslationService {
        let translator = ResilientTranslator::new(
            Arc::new(StaticCredentialSource::new(["key-a", "key-b"])),
            Arc::new(FixedInvoker(outcome)),
            RetryPolicy::fixed(Duration::ZERO),
        );
        TranslationService::new(Arc::new(translator), Arc::new(repo))
    }

    fn stored(new: &NewTranslation) -> TranslationRecord {
        let now = Utc::now();
        TranslationRecord {
            id: "0b6f3c1e-saved".to_string(),
            japanese: new.japanese.clone(),
            english: new.english.clone(),
            rating: None,
            comment: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn records_trimmed_pair_and_returns_id() {
        let mut repo = MockTranslationRepository::new();
        repo.expect_insert()
            .withf(|new| new.japanese == "次は品川です" && new.english == "The next stop is Shinagawa.")
            .times(1)
            .returning(|new| Ok(stored(&new)));

        let result = service(Ok("The next stop is Shinagawa."), repo)
            .translate(Some("  次は品川です \n"))
            .await
            .unwrap();

        assert_eq!(result.original_text, "  次は品川です \n");
        assert_eq!(result.english_translation, "The next stop is Shinagawa.");
        assert_eq!(result.translation_id.as_deref(), Some("0b6f3c1e-saved"));
    }

    #[tokio::test]
    async fn storage_failure_still_returns_translation() {
        let mut repo = MockTranslationRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(RepositoryError::Storage("disk full".to_string())));

        let result = service(Ok("Mind the gap."), repo)
            .translate(Some("足元にご注意ください"))
            .await
            .unwrap();

        assert_eq!(result.english_translation, "Mind the gap.");
        assert!(result.translation_id.is_none());
    }

    #[tokio::test]
    async fn empty_translation_is_not_recorded() {
        let mut repo = MockTranslationRepository::new();
        repo.expect_insert().never();

        let result = service(Ok(""), repo)
            .translate(Some("今日はいい天気ですね"))
            .await
            .unwrap();

        assert_eq!(result.english_translation, "");
        assert!(result.translation_id.is_none());
    }

    #[tokio::test]
    async fn invalid_text_never_reaches_the_model() {
        for (input, expected) in [(None, TEXT_REQUIRED), (Some(""), TEXT_REQUIRED), (Some("   "), TEXT_EMPTY)] {
            let mut repo = MockTranslationRepository::new();
            repo.expect_insert().never();
            let err = service(Ok("unused"), repo).translate(input).await.unwrap_err();
            assert!(matches!(err, CoreError::Validation(msg) if msg == expected));
        }
    }

    #[tokio::test]
    async fn exhausted_pool_surfaces_translate_error() {
        let mut repo = MockTranslationRepository::new();
        repo.expect_insert().never();

        let err = service(Err("503 Service Unavailable"), repo)
            .translate(Some("運転を見合わせています"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Translate(TranslateError::Exhausted { attempts: 2, .. })
        ));
    }
}
