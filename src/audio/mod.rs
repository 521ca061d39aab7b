//! Audio segment types and WAV assembly.

pub mod assembler;

pub use assembler::{assemble, AudioFile};

/// Output sample rate in Hz, fixed by the TTS service.
pub const SAMPLE_RATE: u32 = 24_000;

/// Mono output.
pub const CHANNELS: u16 = 1;

/// 16-bit samples.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Raw PCM audio returned for one text chunk.
///
/// Samples are 16-bit little-endian mono at 24 kHz, with no container
/// framing. Segments are never mutated after receipt.
#[derive(Debug, Clone)]
pub struct AudioSegment {
    /// Index of the chunk this audio belongs to
    pub chunk_index: usize,
    /// Raw sample bytes
    pub pcm: Vec<u8>,
}

impl AudioSegment {
    /// Create a new audio segment.
    pub fn new(chunk_index: usize, pcm: Vec<u8>) -> Self {
        Self { chunk_index, pcm }
    }
}
