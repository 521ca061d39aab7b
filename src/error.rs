//! Error types shared across the synthesis pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown voice: {0}. Run 'gtts voices' to list available voices")]
    UnknownVoice(String),

    #[error("chunking error: {0}")]
    Chunking(String),

    #[error("TTS service error{}: {message}", status.map(|c| format!(" (HTTP {})", c)).unwrap_or_default())]
    Service {
        message: String,
        status: Option<u16>,
    },

    #[error("audio segments out of order: expected chunk index {expected}, got {actual}")]
    Ordering { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, TtsError>;
