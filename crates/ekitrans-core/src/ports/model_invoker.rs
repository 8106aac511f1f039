//! Port for a single call to the external generative model.

use async_trait::async_trait;
use thiserror::Error;

use crate::credentials::Credential;

/// One credential's call to the model failed.
///
/// Absorbed by the orchestrator, which moves on to the next credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("call with credential {credential_prefix} failed: {message}")]
pub struct UpstreamCallError {
    /// Redacted form of the credential used.
    pub credential_prefix: String,
    pub message: String,
}

impl UpstreamCallError {
    pub fn new(credential: &Credential, message: impl Into<String>) -> Self {
        Self {
            credential_prefix: credential.redacted(),
            message: message.into(),
        }
    }
}

/// Failure of a whole translation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The credential pool was empty when the request arrived.
    #[error("No API keys found in environment variables")]
    NoCredentials,

    /// Every credential in the pool was tried and failed.
    #[error("Translation failed after {attempts} attempts. Last error: {last_error}")]
    Exhausted { attempts: usize, last_error: String },
}

/// Single-shot translation through the external model.
///
/// Implementations build the fixed instruction prompt, issue exactly one
/// call with the given credential, and return the trimmed text. An empty
/// string is a valid result ("not a railway announcement"), not a failure.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke(&self, text: &str, credential: &Credential)
    -> Result<String, UpstreamCallError>;
}
