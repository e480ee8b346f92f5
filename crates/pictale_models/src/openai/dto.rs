//! Chat completion wire types.

use derive_builder::Builder;
use pictale_core::{GenerateRequest, Message};
use serde::{Deserialize, Serialize};

/// Body of `POST {base_url}/chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Builder)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model name, e.g. `gpt-3.5-turbo`
    pub model: String,
    /// The rendered story prompt, as one user turn
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f32,
    /// Token cap, omitted from the body when unset
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    /// Start building a request.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

impl From<&GenerateRequest> for ChatCompletionRequest {
    fn from(request: &GenerateRequest) -> Self {
        Self {
            model: request.model().clone(),
            messages: request.messages().iter().map(ChatMessage::from).collect(),
            temperature: *request.temperature(),
            max_tokens: *request.max_tokens(),
        }
    }
}

/// One chat turn on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChatMessage {
    /// `user` for prompts, `assistant` for completions
    pub role: String,
    /// Turn text
    pub content: String,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role().to_string(),
            content: message.content().clone(),
        }
    }
}

/// Completion payload. Only `choices` is required; compatible servers often
/// leave the rest out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    /// Server-assigned id
    #[serde(default)]
    pub id: String,
    /// Model that answered
    #[serde(default)]
    pub model: Option<String>,
    /// Candidates, first one wins
    pub choices: Vec<Choice>,
    /// Token accounting
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// One candidate completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Choice {
    /// Position among candidates
    #[serde(default)]
    pub index: u32,
    /// The story text, as an assistant turn
    pub message: ChatMessage,
    /// `stop`, `length`, ...
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token counts reported by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Usage {
    /// Prompt side
    pub prompt_tokens: u32,
    /// Completion side
    pub completion_tokens: u32,
    /// Sum of both
    pub total_tokens: u32,
}
