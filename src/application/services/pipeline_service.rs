use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, TextSplitter};
use crate::application::services::{StructuringError, StructuringService};
use crate::domain::{Document, DocumentFormat, StructuredDocument};
use crate::infrastructure::text_processing::{DuplicateDetector, TextCleaner};

/// End-to-end document pipeline: extract raw text, optionally collapse
/// near-duplicate sentences, then structure through the LLM.
pub struct PipelineService<F, L, S>
where
    F: FileLoader,
    L: LlmClient,
    S: TextSplitter,
{
    file_loader: Arc<F>,
    structuring_service: Arc<StructuringService<L, S>>,
    duplicate_detector: DuplicateDetector,
    text_cleaner: TextCleaner,
    advanced_cleaning: bool,
}

impl<F, L, S> PipelineService<F, L, S>
where
    F: FileLoader,
    L: LlmClient,
    S: TextSplitter,
{
    pub fn new(
        file_loader: Arc<F>,
        structuring_service: Arc<StructuringService<L, S>>,
        duplicate_detector: DuplicateDetector,
        advanced_cleaning: bool,
    ) -> Self {
        Self {
            file_loader,
            structuring_service,
            duplicate_detector,
            text_cleaner: TextCleaner,
            advanced_cleaning,
        }
    }

    #[tracing::instrument(skip_all, fields(filename = %filename, format = %format))]
    pub async fn process(
        &self,
        data: &[u8],
        filename: String,
        format: DocumentFormat,
    ) -> Result<StructuredDocument, PipelineError> {
        let document = Document::new(filename, format, data.len() as u64);

        let text = self
            .file_loader
            .extract_text(data, &document)
            .await
            .map_err(PipelineError::Extraction)?;
        tracing::info!(char_len = text.chars().count(), "text extraction complete");

        let text = if self.advanced_cleaning {
            self.remove_duplicates(text)
        } else {
            text
        };

        self.structuring_service
            .structure(&text, document.id)
            .await
            .map_err(PipelineError::Structuring)
    }

    fn remove_duplicates(&self, text: String) -> String {
        let report = self.duplicate_detector.find_duplicates(&text);
        if !report.has_duplicates() {
            return text;
        }

        tracing::info!(
            group_count = report.groups.len(),
            "collapsing near-duplicate sentences"
        );
        self.text_cleaner.clean(&text, &report)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("structuring: {0}")]
    Structuring(#[from] StructuringError),
}
