//! Public configuration for the Gemini client.

use std::time::Duration;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Environment variable overriding the model.
pub const MODEL_ENV: &str = "EKITRANS_GEMINI_MODEL";

/// Environment variable overriding the API root.
pub const BASE_URL_ENV: &str = "EKITRANS_GEMINI_BASE_URL";

/// Configuration for the Gemini client.
///
/// # Example
///
/// ```
/// use ekitrans_gemini::GeminiConfig;
/// use std::time::Duration;
///
/// let config = GeminiConfig::new()
///     .with_model("gemini-2.0-flash-lite")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub(crate) base_url: String,
    pub(crate) model: String,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("ekitrans/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl GeminiConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, overridden by `EKITRANS_GEMINI_MODEL` and
    /// `EKITRANS_GEMINI_BASE_URL` when set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |name: &str| lookup(name).filter(|v: &String| !v.trim().is_empty());
        let mut config = Self::default();
        if let Some(model) = set(MODEL_ENV) {
            config = config.with_model(model.trim());
        }
        if let Some(url) = set(BASE_URL_ENV) {
            config = config.with_base_url(url.trim());
        }
        config
    }

    /// Set the API root. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}
