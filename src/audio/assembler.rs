//! WAV assembly from ordered PCM segments.

use std::io::Cursor;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use super::{AudioSegment, BITS_PER_SAMPLE, CHANNELS, SAMPLE_RATE};
use crate::error::{Result, TtsError};

/// A finished WAV file image: RIFF/WAVE header plus the concatenated PCM
/// payload of all segments in chunk-index order.
#[derive(Debug, Clone)]
pub struct AudioFile {
    bytes: Vec<u8>,
    data_len: usize,
}

impl AudioFile {
    /// The complete file image, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the PCM payload in bytes.
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    /// Playback duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        let bytes_per_sec = SAMPLE_RATE as f64 * (BITS_PER_SAMPLE / 8) as f64 * CHANNELS as f64;
        self.data_len as f64 / bytes_per_sec
    }

    /// Write the file to `path`, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Concatenate segments into a single canonical WAV file.
///
/// Callers must pass segments already ordered by chunk index; indices are
/// checked to be exactly `0..n` and a violation fails with an ordering error
/// rather than being silently corrected.
pub fn assemble(segments: &[AudioSegment]) -> Result<AudioFile> {
    if segments.is_empty() {
        return Err(TtsError::Chunking(
            "no audio segments to assemble".to_string(),
        ));
    }

    for (expected, segment) in segments.iter().enumerate() {
        if segment.chunk_index != expected {
            return Err(TtsError::Ordering {
                expected,
                actual: segment.chunk_index,
            });
        }
        if segment.pcm.len() % 2 != 0 {
            return Err(TtsError::Service {
                message: format!(
                    "PCM payload for chunk {} is not 16-bit aligned ({} bytes)",
                    segment.chunk_index,
                    segment.pcm.len()
                ),
                status: None,
            });
        }
    }

    let spec = WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut cursor, spec)?;
    let mut data_len = 0;

    for segment in segments {
        data_len += segment.pcm.len();
        for sample in segment.pcm.chunks_exact(2) {
            writer.write_sample(i16::from_le_bytes([sample[0], sample[1]]))?;
        }
    }

    writer.finalize()?;

    Ok(AudioFile {
        bytes: cursor.into_inner(),
        data_len,
    })
}
