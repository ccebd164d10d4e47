//! Shared mock provider for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use completeai_core::llm::{
    FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse, ModelInfo, Usage,
};
use std::sync::{Arc, Mutex};

/// Scripted behavior for the fake model-invocation capability
#[derive(Clone, Copy)]
pub enum MockBehavior {
    /// Succeed with the given raw text
    Text(&'static str),
    /// Succeed with no content field at all
    NoContent,
    /// Fail as if the network call never completed
    NetworkFailure,
}

pub struct MockProvider {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<LLMRequest>>>,
}

impl MockProvider {
    /// Returns the provider plus a handle to the requests it received
    pub fn new(behavior: MockBehavior) -> (Box<Self>, Arc<Mutex<Vec<LLMRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        (
            Box::new(Self {
                behavior,
                requests: Arc::clone(&requests),
            }),
            requests,
        )
    }
}

#[async_trait]
impl LLMProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.requests.lock().unwrap().push(request);

        match self.behavior {
            MockBehavior::Text(text) => Ok(LLMResponse {
                content: Some(text.to_string()),
                model: Some("mock/model".to_string()),
                usage: Some(Usage {
                    prompt_tokens: 12,
                    completion_tokens: 6,
                    total_tokens: 18,
                }),
                finish_reason: FinishReason::Stop,
            }),
            MockBehavior::NoContent => Ok(LLMResponse {
                content: None,
                model: Some("mock/model".to_string()),
                usage: None,
                finish_reason: FinishReason::Stop,
            }),
            MockBehavior::NetworkFailure => {
                Err(LLMError::Network("connection refused".to_string()))
            }
        }
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, LLMError> {
        Ok(vec![ModelInfo {
            id: "mock/model".to_string(),
            name: Some("Mock Model".to_string()),
            description: None,
            context_length: Some(8192),
        }])
    }

    fn supported_models(&self) -> Vec<String> {
        vec!["mock/model".to_string()]
    }

    fn validate_request(&self, _request: &LLMRequest) -> Result<(), LLMError> {
        Ok(())
    }
}
