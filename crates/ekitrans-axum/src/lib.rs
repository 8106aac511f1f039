//! Axum web adapter for ekitrans.
//!
//! Exposes the translation, rating, history and export operations of
//! [`ekitrans_core::AppCore`] as a JSON API under `/api`, plus `/health`.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
