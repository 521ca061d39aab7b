//! Gemini TTS adapter.
//!
//! Direct HTTP implementation against the generateContent endpoint with the
//! audio response modality. Audio comes back base64-encoded inline; the
//! adapter insists on unframed 16-bit PCM at 24 kHz and rejects anything
//! else.

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::SpeechSynthesizer;
use crate::error::{Result, TtsError};
use crate::voice::Voice;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Synthesizer backed by the Gemini generateContent API.
pub struct GeminiSynthesizer {
    model: String,
    api_key: String,
    client: Client,
}

impl GeminiSynthesizer {
    /// Create a new Gemini synthesizer for the given model.
    pub fn new(model: &str, api_key: String) -> Self {
        Self {
            model: model.to_string(),
            api_key,
            client: Client::new(),
        }
    }
}

// Gemini API request/response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
    speech_config: SpeechConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

fn build_request(text: &str, voice: Voice) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }],
        generation_config: GenerationConfig {
            response_modalities: vec!["AUDIO".to_string()],
            speech_config: SpeechConfig {
                voice_config: VoiceConfig {
                    prebuilt_voice_config: PrebuiltVoiceConfig {
                        voice_name: voice.as_str().to_string(),
                    },
                },
            },
        },
    }
}

/// Accept only unframed 16-bit PCM at the pipeline sample rate.
fn validate_mime(mime: &str) -> Result<()> {
    if !mime.starts_with("audio/L16") || !mime.contains("rate=24000") {
        return Err(TtsError::Service {
            message: format!("unexpected audio format from service: {mime}"),
            status: None,
        });
    }
    Ok(())
}

#[async_trait]
impl SpeechSynthesizer for GeminiSynthesizer {
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Vec<u8>> {
        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(text, voice))
            .send()
            .await
            .map_err(|e| TtsError::Service {
                message: format!("request failed: {e}"),
                status: None,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(parsed) => parsed.error.message,
                Err(_) => body,
            };
            return Err(TtsError::Service {
                message,
                status: Some(status.as_u16()),
            });
        }

        let body: GenerateContentResponse =
            response.json().await.map_err(|e| TtsError::Service {
                message: format!("failed to parse response: {e}"),
                status: None,
            })?;

        let inline = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.inline_data))
            .ok_or_else(|| TtsError::Service {
                message: "response contained no audio data".to_string(),
                status: None,
            })?;

        validate_mime(&inline.mime_type)?;

        let pcm = general_purpose::STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| TtsError::Service {
                message: format!("failed to decode audio payload: {e}"),
                status: None,
            })?;

        if pcm.len() % 2 != 0 {
            return Err(TtsError::Service {
                message: format!("audio payload is not 16-bit aligned ({} bytes)", pcm.len()),
                status: None,
            });
        }

        Ok(pcm)
    }
}
