use async_trait::async_trait;

/// Text-completion capability the pipeline depends on. Provider-agnostic:
/// the orchestrator only needs a prompt-in/text-out contract.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;

    /// Complete several independent prompts. Output order matches input
    /// order regardless of how the implementation schedules the calls.
    async fn complete_batch(&self, prompts: &[String]) -> Result<Vec<String>, LlmClientError> {
        futures::future::try_join_all(prompts.iter().map(|p| self.complete(p))).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("request timed out")]
    Timeout,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
