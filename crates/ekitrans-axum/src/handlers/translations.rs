//! Review handlers: rating, history and export.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use chrono::Utc;
use ekitrans_core::{HistoryPage, HistoryQuery, TranslationRecord, export_filename};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::loose_json;
use crate::error::HttpError;
use crate::state::AppState;

/// Response to a successful rating.
#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub message: &'static str,
    pub translation: TranslationRecord,
}

/// Rate a translation.
///
/// `rating` must be an integer; anything else, including a body that is not
/// JSON, is reported like an out-of-range value.
pub async fn rate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<RatingResponse>, HttpError> {
    let payload = loose_json(&body);
    let rating = payload.get("rating").and_then(Value::as_i64);
    let comment = payload
        .get("comment")
        .and_then(Value::as_str)
        .map(str::to_string);

    let translation = state
        .core
        .reviews()
        .rate(&id, rating, comment)
        .await
        .map_err(|e| HttpError::from_core(e, "Failed to update rating"))?;

    tracing::info!(target: "ekitrans.http", id = %id, rating = ?translation.rating, "Rating updated");
    Ok(Json(RatingResponse {
        message: "Rating updated successfully",
        translation,
    }))
}

/// Query string of the history listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub min_rating: Option<i64>,
}

/// One page of translation history.
pub async fn history(
    State(state): State<AppState>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<HistoryPage>, HttpError> {
    let Query(params) = params.map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
    let query = HistoryQuery::new(params.page, params.limit, params.min_rating);

    state
        .core
        .reviews()
        .history(query)
        .await
        .map(Json)
        .map_err(|e| HttpError::from_core(e, "Failed to fetch history"))
}

/// Download every translation rated 4 or higher as a JSON attachment.
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, HttpError> {
    let entries = state
        .core
        .reviews()
        .export()
        .await
        .map_err(|e| HttpError::from_core(e, "Failed to export translations"))?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename(Utc::now().date_naive())
    );
    Ok(([(header::CONTENT_DISPOSITION, disposition)], Json(entries)))
}
