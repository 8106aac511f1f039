//! Internal error types for Gemini calls.
//!
//! These errors are mapped to the core `UpstreamCallError` at the port
//! boundary.

use thiserror::Error;

/// Result type alias for Gemini operations.
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Errors from one Gemini `generateContent` call.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Network or HTTP client error, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Gemini API request failed with status {status}: {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Error message reported by the API, or the status reason
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Invalid response from Gemini API: {message}")]
    InvalidResponse { message: String },

    /// The prompt or the generated candidate was blocked.
    #[error("Response blocked: {reason}")]
    Blocked { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_includes_status() {
        let error = GeminiError::ApiRequestFailed {
            status: 429,
            message: "Resource has been exhausted (e.g. check quota).".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("quota"));
    }

    #[test]
    fn blocked_error_message() {
        let error = GeminiError::Blocked {
            reason: "candidate finished with SAFETY".to_string(),
        };
        assert_eq!(error.to_string(), "Response blocked: candidate finished with SAFETY");
    }
}
