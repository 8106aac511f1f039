//! API credentials for the external model and their discovery.
//!
//! Credentials are read from numbered configuration slots
//! (`GEMINI_API_KEY_1` .. `GEMINI_API_KEY_8`) in ascending slot order. An
//! empty pool is not an error here: the orchestrator reports it on first use
//! so the service can still boot with a misconfigured credential set.

use std::fmt;

/// Number of configuration slots scanned by default.
pub const DEFAULT_CREDENTIAL_SLOTS: usize = 8;

/// Environment variable prefix for credential slots.
pub const CREDENTIAL_ENV_PREFIX: &str = "GEMINI_API_KEY_";

/// Characters of a credential shown in logs and errors.
const REDACTED_PREFIX_LEN: usize = 8;

/// Name of the configuration variable for a 1-based slot.
pub fn credential_var_name(slot: usize) -> String {
    format!("{CREDENTIAL_ENV_PREFIX}{slot}")
}

/// An opaque authorization token for the external model API.
///
/// `Debug` never prints the full token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building the outgoing request only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short, log-safe form of the token.
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(REDACTED_PREFIX_LEN).collect();
        format!("{prefix}...")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.redacted()).finish()
    }
}

/// Ordered set of credentials, read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialPool {
    credentials: Vec<Credential>,
}

impl CredentialPool {
    /// Create a pool from credentials in their intended order.
    pub const fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    /// Discover credentials from `slots` numbered configuration entries.
    ///
    /// Slots are visited in ascending order; absent or blank values are
    /// skipped. Duplicates are kept.
    pub fn load<F>(slots: usize, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut credentials = Vec::with_capacity(slots);
        for slot in 1..=slots {
            let name = credential_var_name(slot);
            match lookup(&name).map(|value| value.trim().to_string()) {
                Some(value) if !value.is_empty() => {
                    let credential = Credential::new(value);
                    tracing::debug!(
                        target: "ekitrans.credentials",
                        slot,
                        credential = %credential.redacted(),
                        "Credential slot loaded"
                    );
                    credentials.push(credential);
                }
                _ => {
                    tracing::trace!(target: "ekitrans.credentials", slot, "Credential slot empty");
                }
            }
        }
        Self { credentials }
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Credential> {
        self.credentials.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Credential> {
        self.credentials.iter()
    }
}

/// Port for discovering the credential pool.
///
/// Called on every translation; implementations must be cheap.
pub trait CredentialSource: Send + Sync {
    fn load(&self) -> CredentialPool;
}

/// Reads credentials from process environment variables.
#[derive(Debug, Clone, Copy)]
pub struct EnvCredentialSource {
    slots: usize,
}

impl EnvCredentialSource {
    pub const fn new(slots: usize) -> Self {
        Self { slots }
    }
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIAL_SLOTS)
    }
}

impl CredentialSource for EnvCredentialSource {
    fn load(&self) -> CredentialPool {
        CredentialPool::load(self.slots, |name| std::env::var(name).ok())
    }
}

/// A fixed pool, for tests and explicit overrides.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialSource {
    pool: CredentialPool,
}

impl StaticCredentialSource {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pool: CredentialPool::new(tokens.into_iter().map(Credential::new).collect()),
        }
    }
}

impl CredentialSource for StaticCredentialSource {
    fn load(&self) -> CredentialPool {
        self.pool.clone()
    }
}
