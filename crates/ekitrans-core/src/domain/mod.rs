//! Domain types.
//!
//! Pure data types shared by the services and adapters, independent of any
//! storage or transport concerns.

pub mod translation;

pub use translation::{
    ExportEntry, HistoryPage, HistoryQuery, NewTranslation, Pagination, RatingUpdate,
    TranslationRecord, TranslationResult,
};
