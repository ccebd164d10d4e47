//! # completeai-core
//!
//! Core library for completeai, a minimal AI code-completion helper. Given a
//! code buffer and a cursor position it slices a bounded trailing context
//! window, wraps it in a language-keyed prompt template, and forwards one
//! chat-completion request to OpenRouter, returning the cleaned text
//! suggestion.
//!
//! ## Architecture Overview
//!
//! - `config/`: centralized constants, API key resolution, and
//!   `completeai.toml` loading.
//! - `completion/`: the engine: context extraction, prompt templates,
//!   output cleanup, and request orchestration.
//! - `llm/`: the model-invocation capability: provider trait, error types,
//!   and the reqwest-based OpenRouter client.
//! - `editor/`: the narrow completion-provider seam host-editor adapters
//!   build on.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use completeai_core::completion::{CompletionEngine, CursorPosition};
//! use completeai_core::llm::OpenRouterProvider;
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = Box::new(OpenRouterProvider::new("sk-or-...".to_string()));
//!     let engine = CompletionEngine::new(provider);
//!
//!     let buffer = "function add(a, b) {\n  return\n";
//!     let outcome = engine
//!         .generate_completion(buffer, CursorPosition::new(1, 8), "javascript", None)
//!         .await;
//!
//!     match outcome.completion() {
//!         Some(text) => println!("{}", text),
//!         None => eprintln!("{}", outcome.error().unwrap_or("unknown failure")),
//!     }
//! }
//! ```

pub mod completion;
pub mod config;
pub mod editor;
pub mod llm;

pub use completion::{
    CompletionEngine, CompletionOutcome, CursorPosition, EngineOptions, build_prompt,
    clean_completion, extract_context,
};
pub use config::{ApiKeySources, CompleteAiConfig, get_api_key, load_dotenv};
pub use editor::{
    CompletionItemProvider, EditorCompletionProvider, Suggestion, SuggestionKind,
    TRIGGER_CHARACTERS,
};
pub use llm::{
    AnyProvider, FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse, Message,
    MessageRole, ModelInfo, OpenRouterProvider, Usage, make_provider,
};
