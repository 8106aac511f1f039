//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to the `AppCore` services.

pub mod translate;
pub mod translations;

use serde_json::Value;

/// Parse a request body as JSON regardless of its `Content-Type`.
///
/// Anything unparseable becomes `Value::Null`, so field lookups see it as
/// missing.
pub(crate) fn loose_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}
