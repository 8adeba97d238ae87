mod chunk;
mod document;
mod duplicate;
mod structured;

pub use chunk::{Chunk, ChunkId, DocumentId};
pub use document::{Document, DocumentFormat};
pub use duplicate::{DuplicateGroup, DuplicateReport};
pub use structured::StructuredDocument;
