use std::fmt;
use std::sync::Arc;

use crate::application::ports::{
    LlmClient, LlmClientError, TextSplitter, TextSplitterError,
};
use crate::application::services::prompt_templates;
use crate::domain::{DocumentId, StructuredDocument};

/// Drives the LLM passes that turn extracted text into structured markdown.
///
/// Short texts are structured in a single call. Longer texts go through
/// map-reduce: every chunk is structured independently, the fragments are
/// joined in chunk order, and one final call synthesizes the combined
/// sections into a coherent document.
pub struct StructuringService<L, S>
where
    L: LlmClient,
    S: TextSplitter,
{
    llm_client: Arc<L>,
    text_splitter: Arc<S>,
    single_pass_threshold: usize,
}

impl<L, S> StructuringService<L, S>
where
    L: LlmClient,
    S: TextSplitter,
{
    pub fn new(llm_client: Arc<L>, text_splitter: Arc<S>, single_pass_threshold: usize) -> Self {
        Self {
            llm_client,
            text_splitter,
            single_pass_threshold,
        }
    }

    #[tracing::instrument(skip_all, fields(document_id = %document_id.as_uuid()))]
    pub async fn structure(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<StructuredDocument, StructuringError> {
        let char_len = text.chars().count();

        if char_len < self.single_pass_threshold {
            tracing::debug!(char_len, "structuring document in a single pass");
            return self.single_pass(text).await;
        }

        tracing::info!(char_len, "document exceeds single-pass threshold, using map-reduce");
        self.map_reduce(text, document_id).await
    }

    async fn single_pass(&self, text: &str) -> Result<StructuredDocument, StructuringError> {
        let prompt = prompt_templates::single_pass_prompt(text);
        let response = self
            .llm_client
            .complete(&prompt)
            .await
            .map_err(|source| StructuringError::Completion {
                stage: Stage::SinglePass,
                source,
            })?;

        require_content(response, Stage::SinglePass).map(StructuredDocument::new)
    }

    async fn map_reduce(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<StructuredDocument, StructuringError> {
        let chunks = self.text_splitter.split(text, document_id).await?;
        tracing::info!(chunk_count = chunks.len(), "mapping chunks");

        // Independent per-chunk calls; the batch contract keeps fragment
        // order aligned with chunk order whatever the completion order.
        let map_prompts: Vec<String> = chunks
            .iter()
            .map(|chunk| prompt_templates::map_prompt(&chunk.text))
            .collect();

        let fragments = self
            .llm_client
            .complete_batch(&map_prompts)
            .await
            .map_err(|source| StructuringError::Completion {
                stage: Stage::Map,
                source,
            })?;

        let mut sections = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            sections.push(require_content(fragment, Stage::Map)?);
        }

        let combined = sections.join("\n\n");
        let reduce_prompt = prompt_templates::reduce_prompt(&combined);
        let response = self
            .llm_client
            .complete(&reduce_prompt)
            .await
            .map_err(|source| StructuringError::Completion {
                stage: Stage::Reduce,
                source,
            })?;

        require_content(response, Stage::Reduce).map(StructuredDocument::new)
    }
}

fn require_content(response: String, stage: Stage) -> Result<String, StructuringError> {
    if response.trim().is_empty() {
        return Err(StructuringError::EmptyCompletion(stage));
    }
    Ok(response)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SinglePass,
    Map,
    Reduce,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::SinglePass => "single_pass",
            Stage::Map => "map",
            Stage::Reduce => "reduce",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StructuringError {
    #[error("splitting: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error("{stage} completion: {source}")]
    Completion {
        stage: Stage,
        source: LlmClientError,
    },
    #[error("{0} completion returned empty content")]
    EmptyCompletion(Stage),
}

impl StructuringError {
    /// Pipeline stage the failure originated in.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Splitting(_) => None,
            Self::Completion { stage, .. } => Some(*stage),
            Self::EmptyCompletion(stage) => Some(*stage),
        }
    }
}
