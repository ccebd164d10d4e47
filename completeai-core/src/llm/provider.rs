//! Provider abstraction for hosted chat-completion APIs.
//!
//! The completion engine talks to exactly one capability: a chat-style
//! completion call plus a model-catalog listing. Providers implement
//! [`LLMProvider`]; the engine owns a boxed instance and stays unaware of
//! transport details. Every transport-level fault (network error, non-2xx
//! status, unexpected payload shape) maps into [`LLMError`] uniformly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::constants::message_roles;

/// Chat request sent to a completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMRequest {
    pub messages: Vec<Message>,
    pub model: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: String) -> Self {
        Self {
            role: MessageRole::User,
            content,
        }
    }

    /// Create an assistant message
    pub fn assistant(content: String) -> Self {
        Self {
            role: MessageRole::Assistant,
            content,
        }
    }

    /// Create a system message
    pub fn system(content: String) -> Self {
        Self {
            role: MessageRole::System,
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    /// Role string for OpenAI-compatible chat APIs (OpenRouter follows the
    /// OpenAI conventions)
    pub fn as_openai_str(&self) -> &'static str {
        match self {
            MessageRole::System => message_roles::SYSTEM,
            MessageRole::User => message_roles::USER,
            MessageRole::Assistant => message_roles::ASSISTANT,
        }
    }
}

/// Token accounting reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Response from a completion provider
#[derive(Debug, Clone)]
pub struct LLMResponse {
    pub content: Option<String>,
    pub model: Option<String>,
    pub usage: Option<Usage>,
    pub finish_reason: FinishReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Error(String),
}

/// Model catalog entry returned by the provider's listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub context_length: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum LLMError {
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Provider error: {0}")]
    Provider(String),
}

/// Model invocation capability
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Provider name (e.g., "openrouter")
    fn name(&self) -> &str;

    /// Generate a completion
    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError>;

    /// List models available from the provider
    async fn list_models(&self) -> Result<Vec<ModelInfo>, LLMError>;

    /// Get the curated model IDs known to work with this provider
    fn supported_models(&self) -> Vec<String>;

    /// Validate a request for this provider
    fn validate_request(&self, request: &LLMRequest) -> Result<(), LLMError>;
}
