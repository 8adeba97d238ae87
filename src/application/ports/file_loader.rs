use async_trait::async_trait;

use crate::domain::{Document, DocumentFormat};

/// Turns raw document bytes into a single extracted text string.
///
/// Implementations must not mutate the input and may return an empty string
/// when the source genuinely contains no extractable text.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed for {filename} ({format}): {reason}")]
    ExtractionFailed {
        filename: String,
        format: DocumentFormat,
        reason: String,
    },
}

impl FileLoaderError {
    pub fn extraction(document: &Document, reason: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            filename: document.filename.clone(),
            format: document.format,
            reason: reason.into(),
        }
    }
}
