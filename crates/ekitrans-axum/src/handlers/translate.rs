//! Translation handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use ekitrans_core::TranslationResult;
use serde_json::Value;

use super::loose_json;
use crate::error::HttpError;
use crate::state::AppState;

const FAILURE: &str = "Translation failed";

/// Translate a Japanese announcement.
///
/// The body is parsed as JSON whatever its `Content-Type`. A missing,
/// non-string or unparseable `text` gets the same validation message as an
/// empty one.
pub async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslationResult>, HttpError> {
    let payload = loose_json(&body);
    let text = payload.get("text").and_then(Value::as_str);

    state
        .core
        .translations()
        .translate(text)
        .await
        .map(Json)
        .map_err(|e| HttpError::from_core(e, FAILURE))
}
