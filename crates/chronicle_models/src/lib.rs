//! Chat-completion model clients for the Chronicle narrative engine.

mod config;
pub mod openai_compat;

pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use openai_compat::OpenAICompatibleClient;
