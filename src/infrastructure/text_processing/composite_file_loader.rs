use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

/// Dispatches extraction to the adapter registered for the document's
/// format. An unregistered format fails before any I/O happens.
pub struct CompositeFileLoader {
    adapters: HashMap<DocumentFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// Loader covering all three supported formats.
    pub fn with_default_adapters() -> Self {
        Self::new(vec![
            (
                DocumentFormat::Pdf,
                Arc::new(super::PdfAdapter::new()) as Arc<dyn FileLoader>,
            ),
            (
                DocumentFormat::Docx,
                Arc::new(super::DocxAdapter::new()) as Arc<dyn FileLoader>,
            ),
            (
                DocumentFormat::Txt,
                Arc::new(super::PlainTextAdapter) as Arc<dyn FileLoader>,
            ),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.format).ok_or_else(|| {
            FileLoaderError::UnsupportedFormat(document.format.to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}
