//! Text processing for the synthesis pipeline.

pub mod chunker;

pub use chunker::split_text;

/// A chunk of text ready for synthesis.
///
/// Chunks are contiguous substrings of the original input; concatenating them
/// in index order reproduces the input exactly.
#[derive(Debug, Clone)]
pub struct TextChunk {
    /// Position in the chunk sequence, contiguous from 0
    pub index: usize,
    /// The text content
    pub text: String,
}

impl TextChunk {
    /// Create a new text chunk.
    pub fn new(index: usize, text: String) -> Self {
        Self { index, text }
    }

    /// Estimated token count of this chunk's text.
    pub fn estimated_tokens(&self) -> usize {
        chunker::estimate_tokens(&self.text)
    }
}
