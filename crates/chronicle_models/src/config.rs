//! Client configuration for chat-completion providers.

use chronicle_error::ConfigError;
use derive_getters::Getters;
use tracing::debug;

/// Default API endpoint (DeepSeek).
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Configuration for an OpenAI-compatible provider.
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ClientConfig {
    api_key: String,
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    #[builder(default = "\"deepseek\"")]
    #[getter(skip)]
    provider_name: &'static str,
}

impl ClientConfig {
    /// Returns the provider name.
    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    /// Creates a builder for ClientConfig.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Loads configuration from the environment.
    ///
    /// Reads `.env` if present, then:
    /// - `DEEPSEEK_API_KEY` (required)
    /// - `DEEPSEEK_MODEL` (default: "deepseek-chat")
    /// - `DEEPSEEK_BASE_URL` (default: "https://api.deepseek.com")
    ///
    /// # Errors
    ///
    /// Returns an error when the API key is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("DEEPSEEK_API_KEY")
            .map_err(|_| ConfigError::new("DEEPSEEK_API_KEY is not set"))?;
        let model = std::env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("DEEPSEEK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        debug!(model = %model, url = %base_url, "Loaded client configuration from environment");

        Ok(Self {
            api_key,
            model,
            base_url,
            provider_name: "deepseek",
        })
    }
}
