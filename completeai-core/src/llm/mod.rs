//! # LLM Integration Layer
//!
//! This module provides the model-invocation capability the completion
//! engine depends on: a chat-style request/response abstraction and the
//! OpenRouter implementation of it.
//!
//! - **Provider Agnostic**: the engine only sees the [`LLMProvider`] trait,
//!   so tests inject a fake capability instead of a network client.
//! - **Error Handling**: transport faults, non-success statuses, and
//!   malformed payloads all surface as [`LLMError`] values; nothing in this
//!   layer panics.
//! - **Async Support**: one suspend-until-complete call per request, no
//!   retries, no caching, no streaming.

pub mod error_display;
pub mod provider;
pub mod providers;

pub use provider::{
    FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse, Message, MessageRole, ModelInfo,
    Usage,
};
pub use providers::OpenRouterProvider;

use crate::config::CompleteAiConfig;

/// Type-erased provider handle
pub type AnyProvider = Box<dyn LLMProvider>;

/// Create the OpenRouter provider from resolved configuration
pub fn make_provider(api_key: String, config: &CompleteAiConfig) -> AnyProvider {
    Box::new(
        OpenRouterProvider::from_config(
            Some(api_key),
            Some(config.provider.model.clone()),
            Some(config.provider.base_url.clone()),
        )
        .with_headers(
            config.provider.http_referer.clone(),
            config.provider.x_title.clone(),
        ),
    )
}
