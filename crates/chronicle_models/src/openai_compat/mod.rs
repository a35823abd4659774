//! Generic OpenAI-compatible API client.
//!
//! This module provides a reusable client for any API that follows the OpenAI
//! chat completions format. DeepSeek is the default provider.

mod client;
pub mod conversions;
mod dto;

pub use client::OpenAICompatibleClient;
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage};
