use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::{Chunk, DocumentId};

/// Separator preference, coarsest first. A level is only descended into when
/// a piece still exceeds the size bound; past the last level the piece is
/// cut at raw character positions.
const SEPARATORS: [&str; 4] = ["\n\n", "\n", ". ", " "];

/// Splits text into chunks of at most `chunk_size` characters, preferring
/// paragraph boundaries over sentence boundaries over whitespace. Each chunk
/// after the first is prefixed with up to `chunk_overlap` characters from
/// the end of the previous chunk so content straddling a boundary appears in
/// both chunks' context. Pieces are sized against `chunk_size - chunk_overlap`
/// so the prefix always fits without pushing a chunk past `chunk_size`.
pub struct RecursiveCharacterSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

struct Span {
    byte_start: usize,
    byte_end: usize,
    char_start: usize,
    char_len: usize,
}

impl RecursiveCharacterSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Characters available to a chunk's own content once the overlap prefix
    /// is reserved.
    fn piece_budget(&self) -> usize {
        self.chunk_size - self.chunk_overlap
    }

    fn split_pieces<'a>(&self, text: &'a str, depth: usize) -> Vec<&'a str> {
        if text.chars().count() <= self.piece_budget() {
            return vec![text];
        }

        if depth == SEPARATORS.len() {
            return hard_split(text, self.piece_budget());
        }

        let mut pieces = Vec::new();
        for piece in text.split_inclusive(SEPARATORS[depth]) {
            if piece.chars().count() <= self.piece_budget() {
                pieces.push(piece);
            } else {
                pieces.extend(self.split_pieces(piece, depth + 1));
            }
        }
        pieces
    }

    /// Greedily merges adjacent pieces while the merge stays within the size
    /// bound. Spans partition the source text exactly.
    fn merge_pieces(&self, pieces: Vec<&str>) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();
        let mut byte_pos = 0;
        let mut char_pos = 0;

        for piece in pieces {
            let piece_chars = piece.chars().count();
            let merged = match spans.last_mut() {
                Some(last) if last.char_len + piece_chars <= self.piece_budget() => {
                    last.byte_end += piece.len();
                    last.char_len += piece_chars;
                    true
                }
                _ => false,
            };

            if !merged {
                spans.push(Span {
                    byte_start: byte_pos,
                    byte_end: byte_pos + piece.len(),
                    char_start: char_pos,
                    char_len: piece_chars,
                });
            }

            byte_pos += piece.len();
            char_pos += piece_chars;
        }

        spans
    }
}

fn hard_split(text: &str, max_chars: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (i, _) in text.char_indices() {
        if count == max_chars {
            pieces.push(&text[start..i]);
            start = i;
            count = 0;
        }
        count += 1;
    }
    pieces.push(&text[start..]);
    pieces
}

#[async_trait]
impl TextSplitter for RecursiveCharacterSplitter {
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        if self.chunk_overlap >= self.chunk_size {
            return Err(TextSplitterError::InvalidConfiguration(format!(
                "overlap {} must be smaller than chunk size {}",
                self.chunk_overlap, self.chunk_size
            )));
        }

        if text.is_empty() {
            return Ok(Vec::new());
        }

        if text.chars().count() <= self.chunk_size {
            return Ok(vec![Chunk::new(text.to_string(), document_id, 0, 0, 0)]);
        }

        let pieces = self.split_pieces(text, 0);
        let spans = self.merge_pieces(pieces);

        let mut chunks = Vec::with_capacity(spans.len());
        for (index, span) in spans.iter().enumerate() {
            // Spans never exceed the piece budget, so the full overlap fits;
            // only the start of the text can shorten it.
            let overlap = if index == 0 {
                0
            } else {
                self.chunk_overlap.min(span.char_start)
            };

            let byte_start = if overlap == 0 {
                span.byte_start
            } else {
                text[..span.byte_start]
                    .char_indices()
                    .rev()
                    .nth(overlap - 1)
                    .map(|(i, _)| i)
                    .unwrap_or(0)
            };

            chunks.push(Chunk::new(
                text[byte_start..span.byte_end].to_string(),
                document_id,
                index,
                span.char_start - overlap,
                overlap,
            ));
        }

        Ok(chunks)
    }
}
