//! Resilient translation over a rotating credential pool.
//!
//! One request makes at most one attempt per credential in the pool, pulling
//! credentials from the shared [`RotationCursor`] and pausing for a fixed
//! delay between attempts. The first success wins.

use std::sync::Arc;
use std::time::Duration;

use crate::credentials::CredentialSource;
use crate::ports::{ModelInvoker, TranslateError, UpstreamCallError};
use crate::rotation::{RotationCursor, RotationSelector};

/// Pause between consecutive attempts when nothing else is configured.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Characters of the source text included in failure logs.
const LOG_PREVIEW_CHARS: usize = 50;

/// Fixed-delay retry policy.
///
/// There is no backoff, jitter or error classification: every failure is
/// retried with the next credential after the same pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delay: Duration,
}

impl RetryPolicy {
    pub const fn fixed(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(DEFAULT_RETRY_DELAY)
    }
}

/// Turns a pool of unreliable credentials into one dependable call.
pub struct ResilientTranslator {
    credentials: Arc<dyn CredentialSource>,
    invoker: Arc<dyn ModelInvoker>,
    cursor: Arc<RotationCursor>,
    policy: RetryPolicy,
}

impl ResilientTranslator {
    /// Create a translator with its own rotation cursor.
    pub fn new(
        credentials: Arc<dyn CredentialSource>,
        invoker: Arc<dyn ModelInvoker>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            credentials,
            invoker,
            cursor: Arc::new(RotationCursor::new()),
            policy,
        }
    }

    /// Share an existing rotation cursor.
    #[must_use]
    pub fn with_cursor(mut self, cursor: Arc<RotationCursor>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> &RotationCursor {
        &self.cursor
    }

    pub const fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Translate `text`, rotating through the credential pool on failure.
    ///
    /// The pool is reloaded on every call. With `N` credentials this makes
    /// at most `N` attempts and sleeps `N - 1` times at most. The returned
    /// string may be empty when the model judged the input not to be a
    /// railway announcement.
    pub async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let pool = self.credentials.load();
        if pool.is_empty() {
            tracing::error!(target: "ekitrans.translate", "No API keys found in environment variables");
            return Err(TranslateError::NoCredentials);
        }

        let selector = RotationSelector::new(&pool, &self.cursor);
        let attempts = pool.len();
        let mut last_error: Option<UpstreamCallError> = None;

        for attempt in 1..=attempts {
            let credential = selector.next()?;
            match self.invoker.invoke(text, credential).await {
                Ok(translation) => {
                    tracing::info!(
                        target: "ekitrans.translate",
                        attempt,
                        credential = %credential.redacted(),
                        "Translation succeeded"
                    );
                    return Ok(translation);
                }
                Err(err) => {
                    tracing::warn!(
                        target: "ekitrans.translate",
                        attempt,
                        attempts,
                        credential = %err.credential_prefix,
                        text = %preview(text),
                        error = %err.message,
                        "Translation attempt failed"
                    );
                    last_error = Some(err);
                    if attempt < attempts {
                        tokio::time::sleep(self.policy.delay).await;
                    }
                }
            }
        }

        let last_error = last_error.map(|e| e.message).unwrap_or_default();
        tracing::error!(
            target: "ekitrans.translate",
            attempts,
            error = %last_error,
            "All credentials failed"
        );
        Err(TranslateError::Exhausted {
            attempts,
            last_error,
        })
    }
}

/// First characters of `text` for log lines.
pub(crate) fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(LOG_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
