//! Completion engine: context extraction, prompt construction, and
//! orchestration of a single provider call per request.

pub mod cleanup;
pub mod context;
pub mod templates;

pub use cleanup::clean_completion;
pub use context::{CursorPosition, extract_context};
pub use templates::{build_prompt, prompt_template};

use crate::config::constants::{completion as completion_policy, models};
use crate::llm::provider::{LLMError, LLMProvider, LLMRequest, Message, ModelInfo, Usage};

/// Windowing and sampling policy for the engine.
///
/// The defaults favor deterministic, short completions: low temperature, a
/// small output-token cap, and a ten-line context window.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Lines of trailing context sent to the model
    pub context_window: usize,
    /// Output token cap
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Model ID sent to the provider
    pub model: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            context_window: completion_policy::DEFAULT_CONTEXT_WINDOW,
            max_tokens: completion_policy::DEFAULT_MAX_TOKENS,
            temperature: completion_policy::DEFAULT_TEMPERATURE,
            model: models::openrouter::DEFAULT_MODEL.to_string(),
        }
    }
}

/// Outcome of one completion request.
///
/// Two-branch observable shape: success with the cleaned completion text (and
/// whatever usage metadata the provider reported), or failure with a
/// human-readable error. [`CompletionEngine::generate_completion`] resolves
/// every fault path to `Failure`; nothing escapes it as a panic or an `Err`.
#[derive(Debug, Clone)]
pub enum CompletionOutcome {
    Success {
        completion: String,
        usage: Option<Usage>,
    },
    Failure {
        error: String,
    },
}

impl CompletionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompletionOutcome::Success { .. })
    }

    /// The completion text, if this is the success branch
    pub fn completion(&self) -> Option<&str> {
        match self {
            CompletionOutcome::Success { completion, .. } => Some(completion),
            CompletionOutcome::Failure { .. } => None,
        }
    }

    /// The error message, if this is the failure branch
    pub fn error(&self) -> Option<&str> {
        match self {
            CompletionOutcome::Success { .. } => None,
            CompletionOutcome::Failure { error } => Some(error),
        }
    }
}

/// Code completion engine
///
/// Stateless between calls: each request extracts a context window, builds a
/// prompt, and delegates one chat-completion call to the injected provider.
/// No retries, no caching, no shared mutable state.
pub struct CompletionEngine {
    provider: Box<dyn LLMProvider>,
    options: EngineOptions,
}

impl CompletionEngine {
    /// Create an engine with the default policy
    pub fn new(provider: Box<dyn LLMProvider>) -> Self {
        Self::with_options(provider, EngineOptions::default())
    }

    /// Create an engine with an explicit policy
    pub fn with_options(provider: Box<dyn LLMProvider>, options: EngineOptions) -> Self {
        Self { provider, options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The model ID requests default to
    pub fn model(&self) -> &str {
        &self.options.model
    }

    /// Generate a completion for `buffer` at `cursor`.
    ///
    /// `model` overrides the engine's configured model for this call only.
    /// Faults from the provider (network, non-success status, malformed
    /// response) come back as [`CompletionOutcome::Failure`].
    pub async fn generate_completion(
        &self,
        buffer: &str,
        cursor: CursorPosition,
        language: &str,
        model: Option<&str>,
    ) -> CompletionOutcome {
        let context = extract_context(buffer, cursor, self.options.context_window);
        let prompt = build_prompt(&context, language);

        let request = LLMRequest {
            messages: vec![Message::user(prompt)],
            model: model.unwrap_or(&self.options.model).to_string(),
            max_tokens: Some(self.options.max_tokens),
            temperature: Some(self.options.temperature),
        };

        tracing::debug!(
            language,
            line = cursor.line,
            model = %request.model,
            "generating completion"
        );

        match self.provider.generate(request).await {
            Ok(response) => CompletionOutcome::Success {
                completion: clean_completion(response.content.as_deref()),
                usage: response.usage,
            },
            Err(error) => {
                tracing::debug!(%error, "completion request failed");
                CompletionOutcome::Failure {
                    error: error.to_string(),
                }
            }
        }
    }

    /// List the models available from the configured provider
    pub async fn available_models(&self) -> Result<Vec<ModelInfo>, LLMError> {
        self.provider.list_models().await
    }
}
