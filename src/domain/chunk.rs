use uuid::Uuid;

/// A contiguous segment of extracted text, sized to fit an LLM context
/// window. Each chunk after the first carries an `overlap`-character prefix
/// duplicated from the end of the previous chunk; stripping those prefixes
/// and concatenating the chunks reconstructs the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub id: ChunkId,
    pub text: String,
    pub document_id: DocumentId,
    /// Position in the chunk sequence, starting at 0.
    pub index: usize,
    /// Character offset of this chunk's first character in the source text.
    pub offset: usize,
    /// Number of leading characters shared with the previous chunk.
    pub overlap: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkId(Uuid);

impl ChunkId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    pub fn new(
        text: String,
        document_id: DocumentId,
        index: usize,
        offset: usize,
        overlap: usize,
    ) -> Self {
        Self {
            id: ChunkId::new(),
            text,
            document_id,
            index,
            offset,
            overlap,
        }
    }

    /// The portion of this chunk not already covered by the previous chunk.
    pub fn body(&self) -> &str {
        let byte_start = self
            .text
            .char_indices()
            .nth(self.overlap)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[byte_start..]
    }
}
