//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use ekitrans_core::paths::database_path;
use ekitrans_core::{AppCore, CredentialSource, EnvCredentialSource, TranslatorSettings};
use ekitrans_db::{CoreFactory, setup_database};
use ekitrans_gemini::{GeminiConfig, GeminiInvoker};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable for the HTTP port.
pub const PORT_ENV: &str = "EKITRANS_PORT";

/// Environment variable naming the single allowed browser origin.
pub const FRONTEND_URL_ENV: &str = "FRONTEND_URL";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// `FRONTEND_URL` when set, otherwise every origin.
    pub fn from_frontend_url(frontend_url: Option<String>) -> Self {
        match frontend_url.map(|url| url.trim().to_string()) {
            Some(url) if !url.is_empty() => Self::AllowOrigins(vec![url]),
            _ => Self::AllowAll,
        }
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Read the configuration from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), database_path()?)
    }

    fn from_lookup<F>(lookup: F, database_path: PathBuf) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{PORT_ENV} must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            port,
            database_path,
            cors: CorsConfig::from_frontend_url(lookup(FRONTEND_URL_ENV)),
        })
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    pub const fn new(core: Arc<AppCore>) -> Self {
        Self { core }
    }
}

/// Wire the database, the Gemini client and the credential source into an
/// [`AxumContext`].
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "ekitrans.http",
        database_path = %config.database_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;

    let settings = TranslatorSettings::from_env()?;
    let credentials = EnvCredentialSource::new(settings.credential_slots);
    let available = credentials.load().len();
    if available == 0 {
        tracing::warn!(
            target: "ekitrans.credentials",
            "No API keys found in environment variables; translations will fail"
        );
    } else {
        tracing::info!(target: "ekitrans.credentials", count = available, "API keys found");
    }

    let gemini = GeminiConfig::from_env();
    tracing::info!(target: "ekitrans.http", model = %gemini.model(), "Using Gemini model");
    let invoker = GeminiInvoker::new(gemini)?;

    let core = CoreFactory::build_app_core(
        pool,
        Arc::new(credentials),
        Arc::new(invoker),
        settings,
    );

    Ok(AxumContext::new(Arc::new(core)))
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(target: "ekitrans.http", "ekitrans listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_url_selects_cors_mode() {
        assert_eq!(CorsConfig::from_frontend_url(None), CorsConfig::AllowAll);
        assert_eq!(
            CorsConfig::from_frontend_url(Some(" ".to_string())),
            CorsConfig::AllowAll
        );
        assert_eq!(
            CorsConfig::from_frontend_url(Some("https://ekitrans.example".to_string())),
            CorsConfig::AllowOrigins(vec!["https://ekitrans.example".to_string()])
        );
    }

    #[test]
    fn config_defaults() {
        let config = ServerConfig::from_lookup(|_| None, PathBuf::from("/tmp/e.db")).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.cors, CorsConfig::AllowAll);
    }

    #[test]
    fn config_from_lookup() {
        let config = ServerConfig::from_lookup(
            |name: &str| match name {
                PORT_ENV => Some("8088".to_string()),
                FRONTEND_URL_ENV => Some("http://localhost:5173".to_string()),
                _ => None,
            },
            PathBuf::from("/tmp/e.db"),
        )
        .unwrap();
        assert_eq!(config.port, 8088);
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec!["http://localhost:5173".to_string()])
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = ServerConfig::from_lookup(
            |name: &str| (name == PORT_ENV).then(|| "eighty".to_string()),
            PathBuf::from("/tmp/e.db"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn builders_override_fields() {
        let config = ServerConfig::from_lookup(|_| None, PathBuf::from("/tmp/e.db"))
            .unwrap()
            .with_port(0)
            .with_database_path("/tmp/other.db")
            .with_allowed_origins(vec!["https://a.example".to_string()]);
        assert_eq!(config.port, 0);
        assert_eq!(config.database_path, PathBuf::from("/tmp/other.db"));
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(_)));
    }
}
