//! Editor-facing completion seam.
//!
//! Host frameworks (VS Code and friends) each define their own
//! completion-item protocol. The engine never sees those types: it satisfies
//! the narrow [`CompletionItemProvider`] interface here, and a separate host
//! adapter translates [`Suggestion`] values to the framework's items. The
//! concrete host binding lives outside this crate.

use async_trait::async_trait;

use crate::completion::{CompletionEngine, CompletionOutcome, CursorPosition, EngineOptions};
use crate::config::constants::completion as completion_policy;
use crate::llm::provider::LLMProvider;

/// Characters that should trigger a completion request in the host editor
pub const TRIGGER_CHARACTERS: &[char] = &[' ', '.', '(', '{', '\n'];

/// Kind tag for a suggestion, mirroring host completion-item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Text,
    Snippet,
}

/// A single completion suggestion handed to the host adapter
#[derive(Debug, Clone)]
pub struct Suggestion {
    /// Text inserted at the cursor when the suggestion is accepted
    pub insert_text: String,
    /// Short source tag shown next to the suggestion
    pub detail: String,
    /// Longer description, names the generating model
    pub documentation: String,
    pub kind: SuggestionKind,
}

/// Narrow completion-provider capability the host adapter consumes
#[async_trait]
pub trait CompletionItemProvider: Send + Sync {
    async fn provide_completions(
        &self,
        buffer: &str,
        cursor: CursorPosition,
        language: &str,
    ) -> Vec<Suggestion>;
}

/// Engine-backed provider for editor integrations.
///
/// Uses the wider editor context window. A failed completion logs a warning
/// and yields an empty list; presenting the fault to the user is the host's
/// job.
pub struct EditorCompletionProvider {
    engine: CompletionEngine,
}

impl EditorCompletionProvider {
    /// Wrap an engine whose options the caller already configured
    pub fn new(engine: CompletionEngine) -> Self {
        Self { engine }
    }

    /// Build a provider around `provider` with the editor's context window
    pub fn with_provider(provider: Box<dyn LLMProvider>) -> Self {
        let options = EngineOptions {
            context_window: completion_policy::EDITOR_CONTEXT_WINDOW,
            ..EngineOptions::default()
        };
        Self {
            engine: CompletionEngine::with_options(provider, options),
        }
    }

    pub fn engine(&self) -> &CompletionEngine {
        &self.engine
    }
}

#[async_trait]
impl CompletionItemProvider for EditorCompletionProvider {
    async fn provide_completions(
        &self,
        buffer: &str,
        cursor: CursorPosition,
        language: &str,
    ) -> Vec<Suggestion> {
        match self
            .engine
            .generate_completion(buffer, cursor, language, None)
            .await
        {
            CompletionOutcome::Success { completion, .. } if !completion.is_empty() => {
                vec![Suggestion {
                    insert_text: completion,
                    detail: "completeai".to_string(),
                    documentation: format!(
                        "AI-generated completion using {}",
                        self.engine.model()
                    ),
                    kind: SuggestionKind::Text,
                }]
            }
            CompletionOutcome::Success { .. } => Vec::new(),
            CompletionOutcome::Failure { error } => {
                tracing::warn!(%error, "completion provider request failed");
                Vec::new()
            }
        }
    }
}
