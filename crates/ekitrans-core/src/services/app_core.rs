//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, Web)
//! receive an `AppCore` instance and use it to access all functionality.

use std::sync::Arc;

use crate::config::TranslatorSettings;
use crate::credentials::CredentialSource;
use crate::ports::{ModelInvoker, TranslationRepository};

use super::{ResilientTranslator, ReviewService, TranslationService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let core = AppCore::new(
///     Arc::new(EnvCredentialSource::default()),
///     Arc::new(GeminiInvoker::new(GeminiConfig::from_env())?),
///     repo,
///     TranslatorSettings::from_env()?,
/// );
///
/// let result = core.translations().translate(Some("次は東京です")).await?;
/// ```
pub struct AppCore {
    translations: TranslationService,
    reviews: ReviewService,
}

impl AppCore {
    /// Wire the services around one shared translator and repository.
    pub fn new(
        credentials: Arc<dyn CredentialSource>,
        invoker: Arc<dyn ModelInvoker>,
        repo: Arc<dyn TranslationRepository>,
        settings: TranslatorSettings,
    ) -> Self {
        let translator = Arc::new(ResilientTranslator::new(
            credentials,
            invoker,
            settings.retry_policy(),
        ));
        Self {
            translations: TranslationService::new(translator, Arc::clone(&repo)),
            reviews: ReviewService::new(repo),
        }
    }

    /// Access the translation service.
    pub const fn translations(&self) -> &TranslationService {
        &self.translations
    }

    /// Access the review service.
    pub const fn reviews(&self) -> &ReviewService {
        &self.reviews
    }
}
