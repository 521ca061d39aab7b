//! Speech synthesis backends.

pub mod gemini;

use async_trait::async_trait;

use crate::error::Result;
use crate::voice::Voice;

/// A speech synthesis backend: text in, raw PCM out.
///
/// Implementations return 16-bit little-endian mono samples at 24 kHz with no
/// container framing, or a service error carrying the upstream status and
/// message. One call means one outbound request; there is no retry at this
/// layer.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize one chunk of text with the given voice.
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Vec<u8>>;
}
