use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

/// Extracts paragraph text from DOCX files.
///
/// A DOCX is a ZIP archive whose main content lives in `word/document.xml`;
/// paragraphs are `w:p` elements and their text runs are `w:t` elements.
/// Parsed manually with `zip` + `quick-xml` since docx-rs is writer-only.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_paragraphs(data: &[u8]) -> Result<Vec<String>, String> {
        let mut archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| format!("failed to open DOCX archive: {e}"))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| format!("missing word/document.xml: {e}"))?
            .read_to_string(&mut xml)
            .map_err(|e| format!("failed to read word/document.xml: {e}"))?;

        let mut reader = Reader::from_str(&xml);

        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_text_run = false;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"w:t" => in_text_run = true,
                    b"w:tab" => current.push('\t'),
                    b"w:br" => current.push('\n'),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"w:tab" => current.push('\t'),
                    b"w:br" => current.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(t)) if in_text_run => {
                    let text = t
                        .unescape()
                        .map_err(|e| format!("malformed text run: {e}"))?;
                    current.push_str(&text);
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_text_run = false,
                    b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(format!("malformed document.xml: {e}")),
            }
            buf.clear();
        }

        if !current.is_empty() {
            paragraphs.push(current);
        }

        Ok(paragraphs)
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Docx {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        let paragraphs = Self::extract_paragraphs(data)
            .map_err(|reason| FileLoaderError::extraction(document, reason))?;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        Ok(paragraphs.join("\n").trim().to_string())
    }
}
