//! Shared fixtures for router integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use ekitrans_axum::{AxumContext, CorsConfig, create_router};
use ekitrans_core::{
    AppCore, Credential, HistoryQuery, ModelInvoker, NewTranslation, RatingUpdate,
    RepositoryError, StaticCredentialSource, TranslationRecord, TranslationRepository,
    TranslatorSettings, UpstreamCallError,
};
use ekitrans_db::{SqliteTranslationRepository, setup_test_database};
use http_body_util::BodyExt;
use serde_json::Value;

/// Model stand-in answering per credential and counting calls.
#[derive(Default)]
pub struct ScriptedInvoker {
    outcomes: HashMap<String, Result<String, String>>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedInvoker {
    pub fn new(outcomes: &[(&str, Result<&str, &str>)]) -> Arc<Self> {
        Arc::new(Self {
            outcomes: outcomes
                .iter()
                .map(|(key, outcome)| {
                    let outcome = (*outcome).map(str::to_string).map_err(str::to_string);
                    ((*key).to_string(), outcome)
                })
                .collect(),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelInvoker for ScriptedInvoker {
    async fn invoke(&self, _text: &str, credential: &Credential) -> Result<String, UpstreamCallError> {
        self.calls
            .lock()
            .unwrap()
            .push(credential.expose().to_string());
        match self.outcomes.get(credential.expose()) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(msg)) => Err(UpstreamCallError::new(credential, msg.clone())),
            None => Err(UpstreamCallError::new(credential, "unscripted credential")),
        }
    }
}

/// Repository whose every operation fails.
pub struct BrokenRepository;

#[async_trait]
impl TranslationRepository for BrokenRepository {
    async fn insert(&self, _new: NewTranslation) -> Result<TranslationRecord, RepositoryError> {
        Err(RepositoryError::Storage("database is locked".to_string()))
    }

    async fn get(&self, _id: &str) -> Result<Option<TranslationRecord>, RepositoryError> {
        Err(RepositoryError::Storage("database is locked".to_string()))
    }

    async fn update_rating(
        &self,
        _id: &str,
        _update: RatingUpdate,
    ) -> Result<Option<TranslationRecord>, RepositoryError> {
        Err(RepositoryError::Storage("database is locked".to_string()))
    }

    async fn list(
        &self,
        _query: &HistoryQuery,
    ) -> Result<(Vec<TranslationRecord>, u64), RepositoryError> {
        Err(RepositoryError::Storage("database is locked".to_string()))
    }

    async fn list_rated_at_least(
        &self,
        _min_rating: u8,
    ) -> Result<Vec<TranslationRecord>, RepositoryError> {
        Err(RepositoryError::Storage("database is locked".to_string()))
    }
}

fn settings() -> TranslatorSettings {
    TranslatorSettings::default().with_retry_delay(Duration::ZERO)
}

/// Router over an in-memory database.
pub async fn app(keys: &[&str], invoker: Arc<ScriptedInvoker>, cors: &CorsConfig) -> Router {
    let pool = setup_test_database().await.unwrap();
    app_with_repo(keys, invoker, Arc::new(SqliteTranslationRepository::new(pool)), cors)
}

pub fn app_with_repo(
    keys: &[&str],
    invoker: Arc<ScriptedInvoker>,
    repo: Arc<dyn TranslationRepository>,
    cors: &CorsConfig,
) -> Router {
    let core = AppCore::new(
        Arc::new(StaticCredentialSource::new(keys.iter().copied())),
        invoker,
        repo,
        settings(),
    );
    create_router(AxumContext::new(Arc::new(core)), cors)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
