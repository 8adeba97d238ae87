mod composite_file_loader;
mod docx_adapter;
mod duplicate_detector;
mod pdf_adapter;
mod plain_text_adapter;
mod recursive_character_splitter;
mod sentences;
mod text_cleaner;
mod text_sanitizer;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use duplicate_detector::DuplicateDetector;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use recursive_character_splitter::RecursiveCharacterSplitter;
pub use sentences::split_into_sentences;
pub use text_cleaner::TextCleaner;
pub use text_sanitizer::collapse_whitespace;
