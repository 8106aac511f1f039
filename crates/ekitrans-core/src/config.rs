//! Translator settings.
//!
//! Settings are read from the environment once, at the composition root,
//! and handed to the services by value.

use std::time::Duration;

use crate::credentials::DEFAULT_CREDENTIAL_SLOTS;
use crate::ports::CoreError;
use crate::services::{DEFAULT_RETRY_DELAY, RetryPolicy};

/// Environment variable for the fixed delay between attempts, in milliseconds.
pub const RETRY_DELAY_ENV: &str = "EKITRANS_RETRY_DELAY_MS";

/// Tunables of the resilient translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorSettings {
    /// Pause between consecutive attempts of one request.
    pub retry_delay: Duration,
    /// Number of numbered credential slots scanned.
    pub credential_slots: usize,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            retry_delay: DEFAULT_RETRY_DELAY,
            credential_slots: DEFAULT_CREDENTIAL_SLOTS,
        }
    }
}

impl TranslatorSettings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(raw) = lookup(RETRY_DELAY_ENV) {
            let millis: u64 = raw.trim().parse().map_err(|_| {
                CoreError::Configuration(format!(
                    "{RETRY_DELAY_ENV} must be a whole number of milliseconds, got {raw:?}"
                ))
            })?;
            settings.retry_delay = Duration::from_millis(millis);
        }
        Ok(settings)
    }

    /// Override the retry delay.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Override the number of credential slots.
    #[must_use]
    pub const fn with_credential_slots(mut self, slots: usize) -> Self {
        self.credential_slots = slots;
        self
    }

    /// The retry policy these settings describe.
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::fixed(self.retry_delay)
    }
}
