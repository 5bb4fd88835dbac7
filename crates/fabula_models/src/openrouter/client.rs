//! OpenRouter chat-completion client.

use crate::openrouter::{interpret_response, ChatCompletionRequest, OpenRouterConfig};
use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse};
use fabula_error::{FabulaResult, GenerationError, GenerationErrorKind};
use fabula_interface::StoryDriver;
use tracing::{debug, instrument};

/// Client for the OpenRouter chat-completion API.
///
/// Holds a shared `reqwest` client; construct once at boot and pass a handle
/// into each request handler. Every generation is a single attempt with the
/// transport's default timeout.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    config: OpenRouterConfig,
    client: reqwest::Client,
}

impl OpenRouterClient {
    /// Create a new client.
    #[instrument(skip(config), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(config: OpenRouterConfig) -> Self {
        debug!("Creating OpenRouter client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    /// Send a chat completion request and extract the generated content.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("HTTP-Referer", &self.config.referer)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                GenerationError::new(GenerationErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            GenerationError::new(GenerationErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        debug!(status, body_length = body.len(), "Received upstream response");
        interpret_response(status, &body)
    }
}

#[async_trait]
impl StoryDriver for OpenRouterClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        let request = ChatCompletionRequest::from_generate(req, &self.config.model);
        let text = self.chat_completion(&request).await?;
        Ok(GenerateResponse { text })
    }

    fn provider_name(&self) -> &'static str {
        "openrouter"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
