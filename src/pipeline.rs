//! End-to-end synthesis pipeline: chunk, synthesize sequentially, assemble.

use crate::audio::{AudioFile, AudioSegment, assemble};
use crate::error::{Result, TtsError};
use crate::text::split_text;
use crate::tts::SpeechSynthesizer;
use crate::voice::Voice;

/// Drives text through chunking, per-chunk synthesis, and WAV assembly.
pub struct Pipeline {
    synthesizer: Box<dyn SpeechSynthesizer>,
    max_tokens: usize,
}

impl Pipeline {
    /// Create a pipeline over the given backend and per-chunk token budget.
    pub fn new(synthesizer: Box<dyn SpeechSynthesizer>, max_tokens: usize) -> Self {
        Self {
            synthesizer,
            max_tokens,
        }
    }

    /// Synthesize `text` into a single WAV file.
    ///
    /// Chunks are synthesized strictly one at a time, in index order, so the
    /// assembled payload order matches the input order without any sorting.
    /// The first synthesis failure aborts the whole run; partially
    /// synthesized segments are discarded and no file is produced.
    ///
    /// `on_progress(completed, total)` fires after each chunk completes.
    pub async fn run<F>(&self, text: &str, voice: Voice, mut on_progress: F) -> Result<AudioFile>
    where
        F: FnMut(usize, usize),
    {
        let chunks = split_text(text, self.max_tokens)?;
        if chunks.is_empty() {
            return Err(TtsError::Chunking("input text is empty".to_string()));
        }

        let total = chunks.len();
        let mut segments = Vec::with_capacity(total);

        for chunk in &chunks {
            let pcm = self.synthesizer.synthesize(&chunk.text, voice).await?;
            segments.push(AudioSegment::new(chunk.index, pcm));
            on_progress(segments.len(), total);
        }

        assemble(&segments)
    }
}
