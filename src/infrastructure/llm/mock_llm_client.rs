use std::collections::VecDeque;
use std::sync::Mutex;

use crate::application::ports::{LlmClient, LlmClientError};

/// Test double for the LLM port. Records every prompt it receives and
/// serves scripted responses in order; once the script runs out it either
/// echoes the prompt back (echo mode) or returns a canned answer.
pub struct MockLlmClient {
    calls: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<Result<String, LlmClientError>>>,
    echo: bool,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
            echo: false,
        }
    }

    /// Unscripted responses return the prompt itself, which lets tests
    /// observe exactly what each stage was given.
    pub fn echoing() -> Self {
        Self {
            echo: true,
            ..Self::new()
        }
    }

    pub fn push_response(&self, response: impl Into<String>) {
        self.responses
            .lock()
            .expect("mock responses lock poisoned")
            .push_back(Ok(response.into()));
    }

    pub fn push_error(&self, error: LlmClientError) {
        self.responses
            .lock()
            .expect("mock responses lock poisoned")
            .push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock calls lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock calls lock poisoned").len()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.calls
            .lock()
            .expect("mock calls lock poisoned")
            .push(prompt.to_string());

        let scripted = self
            .responses
            .lock()
            .expect("mock responses lock poisoned")
            .pop_front();

        match scripted {
            Some(response) => response,
            None if self.echo => Ok(prompt.to_string()),
            None => Ok("Mock answer".to_string()),
        }
    }
}
