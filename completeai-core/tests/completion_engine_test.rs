//! End-to-end tests for the completion engine with an injected fake
//! provider.

mod common;

use common::{MockBehavior, MockProvider};
use completeai_core::completion::{CompletionEngine, CompletionOutcome, CursorPosition};
use completeai_core::config::constants::{completion as completion_policy, models};

const BUFFER: &str = "function f(a,b){\n  return a+b;\n}\n";

#[tokio::test]
async fn test_success_path_cleans_and_returns_completion() {
    let (provider, requests) = MockProvider::new(MockBehavior::Text("  return a - b;\n"));
    let engine = CompletionEngine::new(provider);

    let outcome = engine
        .generate_completion(BUFFER, CursorPosition::new(2, 0), "javascript", None)
        .await;

    match outcome {
        CompletionOutcome::Success { completion, usage } => {
            assert_eq!(completion, "return a - b;");
            assert_eq!(usage.unwrap().total_tokens, 18);
        }
        CompletionOutcome::Failure { error } => panic!("unexpected failure: {}", error),
    }

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].messages.len(), 1);

    // All three buffer lines reach the prompt, inside the JavaScript template
    let prompt = &requests[0].messages[0].content;
    assert!(prompt.contains("function f(a,b){\n  return a+b;\n}"));
    assert!(prompt.contains("JavaScript"));
}

#[tokio::test]
async fn test_policy_defaults_are_sent_with_the_request() {
    let (provider, requests) = MockProvider::new(MockBehavior::Text("x"));
    let engine = CompletionEngine::new(provider);

    engine
        .generate_completion(BUFFER, CursorPosition::new(2, 0), "javascript", None)
        .await;

    let requests = requests.lock().unwrap();
    let request = &requests[0];
    assert_eq!(request.model, models::openrouter::DEFAULT_MODEL);
    assert_eq!(
        request.max_tokens,
        Some(completion_policy::DEFAULT_MAX_TOKENS)
    );
    let temperature = request.temperature.unwrap();
    assert!((temperature - completion_policy::DEFAULT_TEMPERATURE).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_model_override_is_passed_through() {
    let (provider, requests) = MockProvider::new(MockBehavior::Text("x"));
    let engine = CompletionEngine::new(provider);

    engine
        .generate_completion(
            BUFFER,
            CursorPosition::new(2, 0),
            "javascript",
            Some("qwen/qwen3-coder"),
        )
        .await;

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].model, "qwen/qwen3-coder");
}

#[tokio::test]
async fn test_failing_provider_resolves_to_failure_without_panicking() {
    let (provider, _requests) = MockProvider::new(MockBehavior::NetworkFailure);
    let engine = CompletionEngine::new(provider);

    let outcome = engine
        .generate_completion(BUFFER, CursorPosition::new(2, 0), "javascript", None)
        .await;

    assert!(!outcome.is_success());
    let error = outcome.error().unwrap();
    assert!(error.contains("connection refused"));
}

#[tokio::test]
async fn test_missing_content_cleans_to_empty_success() {
    let (provider, _requests) = MockProvider::new(MockBehavior::NoContent);
    let engine = CompletionEngine::new(provider);

    let outcome = engine
        .generate_completion(BUFFER, CursorPosition::new(2, 0), "javascript", None)
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.completion(), Some(""));
}

#[tokio::test]
async fn test_unknown_language_uses_default_template() {
    let (provider, requests) = MockProvider::new(MockBehavior::Text("x"));
    let engine = CompletionEngine::new(provider);

    engine
        .generate_completion(BUFFER, CursorPosition::new(2, 0), "unknown-lang", None)
        .await;

    let requests = requests.lock().unwrap();
    let prompt = &requests[0].messages[0].content;
    assert!(prompt.contains("Complete the following code snippet"));
    assert!(!prompt.contains("JavaScript"));
}

#[tokio::test]
async fn test_fenced_model_output_is_unwrapped() {
    let (provider, _requests) =
        MockProvider::new(MockBehavior::Text("```js\nconsole.log(1);\n```"));
    let engine = CompletionEngine::new(provider);

    let outcome = engine
        .generate_completion(BUFFER, CursorPosition::new(2, 0), "javascript", None)
        .await;

    assert_eq!(outcome.completion(), Some("console.log(1);"));
}

#[tokio::test]
async fn test_cursor_past_buffer_end_still_completes() {
    let (provider, requests) = MockProvider::new(MockBehavior::Text("x"));
    let engine = CompletionEngine::new(provider);

    let outcome = engine
        .generate_completion(BUFFER, CursorPosition::new(500, 0), "javascript", None)
        .await;

    assert!(outcome.is_success());
    // Extraction clamps to an empty slice; the template still goes out
    let requests = requests.lock().unwrap();
    assert!(requests[0].messages[0].content.contains("Code:"));
}

#[tokio::test]
async fn test_available_models_lists_provider_catalog() {
    let (provider, _requests) = MockProvider::new(MockBehavior::Text("x"));
    let engine = CompletionEngine::new(provider);

    let models = engine.available_models().await.unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].id, "mock/model");
    assert_eq!(models[0].name.as_deref(), Some("Mock Model"));
}
