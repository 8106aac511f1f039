//! Input validation for translation and rating requests.

use crate::domain::RatingUpdate;
use crate::ports::CoreError;

/// Message for a missing or non-string `text` field.
pub const TEXT_REQUIRED: &str = "Invalid request. Text field is required and must be a string.";

/// Message for a whitespace-only `text` field.
pub const TEXT_EMPTY: &str = "Text cannot be empty.";

/// Message for a missing or out-of-range rating.
pub const RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 5";

/// Validate the source text of a translation request.
///
/// `None` covers both a missing field and a value that is not a string.
/// The text is returned untrimmed.
pub fn validate_source_text(text: Option<&str>) -> Result<&str, CoreError> {
    match text {
        None | Some("") => Err(CoreError::Validation(TEXT_REQUIRED.to_string())),
        Some(text) if text.trim().is_empty() => Err(CoreError::Validation(TEXT_EMPTY.to_string())),
        Some(text) => Ok(text),
    }
}

/// Validate a rating change.
pub fn validate_rating(
    rating: Option<i64>,
    comment: Option<String>,
) -> Result<RatingUpdate, CoreError> {
    let rating = rating
        .filter(|r| (1..=5).contains(r))
        .and_then(|r| u8::try_from(r).ok())
        .ok_or_else(|| CoreError::Validation(RATING_OUT_OF_RANGE.to_string()))?;

    Ok(RatingUpdate {
        rating,
        comment: comment.map(|c| c.trim().to_string()).unwrap_or_default(),
    })
}
