//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know
//! about concrete storage or model implementations.

mod app_core;
mod resilient_translator;
mod review_service;
mod translation_service;

pub use app_core::AppCore;
pub use resilient_translator::{DEFAULT_RETRY_DELAY, ResilientTranslator, RetryPolicy};
pub use review_service::{EXPORT_MIN_RATING, ReviewService, TRANSLATION_NOT_FOUND, export_filename};
pub use translation_service::TranslationService;
