//! The `ModelInvoker` implementation backed by reqwest.

use async_trait::async_trait;
use ekitrans_core::prompt::build_translation_prompt;
use ekitrans_core::{Credential, ModelInvoker, UpstreamCallError};

use crate::config::GeminiConfig;
use crate::error::{GeminiError, GeminiResult};
use crate::response::{GenerateContentRequest, GenerateContentResponse, api_error_message};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Single-attempt Gemini client.
///
/// Cheap to share: the inner `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct GeminiInvoker {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiInvoker {
    /// Create a client with the given configuration.
    pub fn new(config: GeminiConfig) -> GeminiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Send `prompt` once with `credential` and return the generated text.
    pub async fn generate(&self, prompt: &str, credential: &Credential) -> GeminiResult<String> {
        let response = self
            .client
            .post(self.config.endpoint())
            .header(API_KEY_HEADER, credential.expose())
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = api_error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
            return Err(GeminiError::ApiRequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<GenerateContentResponse>(&body)
            .map_err(|e| GeminiError::InvalidResponse {
                message: e.to_string(),
            })?
            .into_text()
    }
}

#[async_trait]
impl ModelInvoker for GeminiInvoker {
    async fn invoke(
        &self,
        text: &str,
        credential: &Credential,
    ) -> Result<String, UpstreamCallError> {
        let prompt = build_translation_prompt(text);
        tracing::debug!(
            target: "ekitrans.translate",
            model = %self.config.model(),
            credential = %credential.redacted(),
            "Calling Gemini"
        );
        self.generate(&prompt, credential)
            .await
            .map_err(|e| UpstreamCallError::new(credential, e.to_string()))
    }
}
