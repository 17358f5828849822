//! Chat-completion wire format (OpenAI-compatible, non-streaming subset)

use serde::{Deserialize, Serialize};

/// Chat completion request
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Message within a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ChatMessage {
    /// Message role
    pub role: String,
    /// Text content
    pub content: String,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    /// Generated choices
    pub choices: Vec<ChatChoice>,
}

/// Choice within a response
#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    /// Generated message
    pub message: ChatChoiceMessage,
}

/// Message within a response choice
#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoiceMessage {
    /// Text content
    #[serde(default)]
    pub content: Option<String>,
}
