//! Request and response types for text generation.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Roles in a chat conversation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions
    #[display("system")]
    System,
    /// End-user message
    #[display("user")]
    User,
    /// Model reply
    #[display("assistant")]
    Assistant,
}

/// A single text message in a conversation.
///
/// # Examples
///
/// ```
/// use pictale_core::{Message, Role};
///
/// let message = Message::builder()
///     .role(Role::User)
///     .content("Hello!")
///     .build()
///     .unwrap();
///
/// assert_eq!(message.role(), &Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The message text
    content: String,
}

impl Message {
    /// Creates a new builder for `Message`.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Shorthand for a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Generation request handed to a text generator.
///
/// # Examples
///
/// ```
/// use pictale_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Tell me a story")])
///     .model("gpt-3.5-turbo")
///     .temperature(1.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model(), "gpt-3.5-turbo");
/// assert_eq!(*request.temperature(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Model identifier to use
    model: String,
    /// Sampling temperature
    temperature: f32,
    /// Maximum number of tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Completion text returned by a text generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateResponse {
    /// Generated completion text
    text: String,
    /// Model that produced the completion, when reported
    model: Option<String>,
}

impl GenerateResponse {
    /// Wrap completion text.
    pub fn new(text: impl Into<String>, model: Option<String>) -> Self {
        Self {
            text: text.into(),
            model,
        }
    }
}
