//! Gemini `generateContent` client for ekitrans.
//!
//! [`GeminiInvoker`] implements the core [`ModelInvoker`] port: one prompt,
//! one credential, one HTTP call. Retrying and credential rotation belong to
//! the core orchestrator.
//!
//! [`ModelInvoker`]: ekitrans_core::ModelInvoker

mod client;
mod config;
mod error;
mod response;

pub use client::GeminiInvoker;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
pub use error::{GeminiError, GeminiResult};
