//! Generic client for OpenAI-compatible APIs.

use crate::config::ClientConfig;
use crate::openai_compat::{ChatResponse, conversions};
use chronicle_core::{GenerateRequest, GenerateResponse};
use chronicle_error::{GenerationError, GenerationErrorKind};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Generic client for any OpenAI-compatible chat completions API.
///
/// DeepSeek is the default provider, but any endpoint speaking the OpenAI
/// chat completions format works.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    config: ClientConfig,
}

impl OpenAICompatibleClient {
    /// Creates a new OpenAI-compatible client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    #[instrument(skip(config), fields(provider = config.provider_name(), model = %config.model()))]
    pub fn new(config: ClientConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Http(e.to_string())))?;

        debug!(
            provider = config.provider_name(),
            model = %config.model(),
            url = %config.base_url(),
            "Created OpenAI-compatible client"
        );

        Ok(Self { client, config })
    }

    /// Generates a response from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, req), fields(provider = self.config.provider_name(), model = %self.config.model()))]
    pub async fn generate(
        &self,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerationError> {
        let chat_request = conversions::to_chat_request(req, self.config.model())?;
        let url = format!("{}/chat/completions", self.config.base_url());

        debug!(
            provider = self.config.provider_name(),
            model = %self.config.model(),
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key()),
            )
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(provider = self.config.provider_name(), error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = self.config.provider_name(),
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(provider = self.config.provider_name(), error = ?e, "Failed to parse response");
            GenerationError::new(GenerationErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(
            provider = self.config.provider_name(),
            choices = chat_response.choices.len(),
            "Received response"
        );

        conversions::from_chat_response(&chat_response)
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        self.config.model()
    }
}
