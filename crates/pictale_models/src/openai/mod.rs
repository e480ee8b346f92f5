//! OpenAI-compatible chat completions.

mod client;
mod dto;

pub use client::OpenAiChatClient;
pub use dto::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    Choice, Usage,
};
