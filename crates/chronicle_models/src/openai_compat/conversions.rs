//! Type conversions between Chronicle and OpenAI formats.

use crate::openai_compat::{ChatMessage, ChatRequest, ChatResponse};
use chronicle_core::{GenerateRequest, GenerateResponse, Role};
use chronicle_error::{GenerationError, GenerationErrorKind};

/// Converts a Chronicle GenerateRequest to OpenAI chat format.
pub fn to_chat_request(
    req: &GenerateRequest,
    model: &str,
) -> Result<ChatRequest, GenerationError> {
    let mut messages = Vec::new();

    for msg in &req.messages {
        let role = match msg.role() {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };

        messages.push(ChatMessage {
            role: role.to_string(),
            content: msg.content().clone(),
        });
    }

    let mut builder = ChatRequest::builder();
    builder
        .model(req.model.as_deref().unwrap_or(model).to_string())
        .messages(messages);

    if let Some(max_tokens) = req.max_tokens {
        builder.max_tokens(max_tokens);
    }

    if let Some(temperature) = req.temperature {
        builder.temperature(temperature);
    }

    if let Some(top_p) = req.top_p {
        builder.top_p(top_p);
    }

    builder.build().map_err(|e| {
        GenerationError::new(GenerationErrorKind::Builder(format!(
            "Failed to build request: {}",
            e
        )))
    })
}

/// Converts an OpenAI chat response to a Chronicle GenerateResponse.
pub fn from_chat_response(response: &ChatResponse) -> Result<GenerateResponse, GenerationError> {
    let content = response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?;

    Ok(GenerateResponse { content })
}
