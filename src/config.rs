//! gtts configuration: TOML file plus environment overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{Result, TtsError};

/// Hard input cap of the TTS context window, in estimated tokens.
pub const MAX_INPUT_TOKENS: usize = 32_000;

const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-tts";
const DEFAULT_VOICE: &str = "Kore";

// ~20,000 chars per request, well under the 32k-token input cap.
const DEFAULT_MAX_TOKENS: usize = 5_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GttsConfig {
    /// API key. The GOOGLE_API_KEY and GEMINI_API_KEY environment variables
    /// take precedence over this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// TTS model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Voice used when --voice is not given
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// Directory for default output paths
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Per-chunk token budget (estimated at four characters per token)
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_max_tokens() -> usize {
    DEFAULT_MAX_TOKENS
}

impl Default for GttsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            default_voice: default_voice(),
            output_dir: default_output_dir(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl GttsConfig {
    /// Get the config file path: ~/.config/gtts/config.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| TtsError::Config("HOME not set".to_string()))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("gtts")
            .join("config.toml"))
    }

    /// Load config from file, returning defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let config = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| {
                TtsError::Config(format!("invalid config file {}: {e}", path.display()))
            })?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the token budget against the service's input cap.
    pub fn validate(&self) -> Result<()> {
        if self.max_tokens == 0 || self.max_tokens > MAX_INPUT_TOKENS {
            return Err(TtsError::Config(format!(
                "max_tokens must be between 1 and {MAX_INPUT_TOKENS}, got {}",
                self.max_tokens
            )));
        }
        Ok(())
    }

    /// Resolve the API key: environment first, then the config file.
    pub fn resolve_api_key(&self) -> Result<String> {
        for var in ["GOOGLE_API_KEY", "GEMINI_API_KEY"] {
            if let Ok(key) = std::env::var(var) {
                if !key.is_empty() {
                    return Ok(key);
                }
            }
        }

        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                TtsError::Config(
                    "no API key found. Set GOOGLE_API_KEY or add api_key to the config file"
                        .to_string(),
                )
            })
    }

    /// Whether an API key is available from any source.
    pub fn api_key_set(&self) -> bool {
        self.resolve_api_key().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GttsConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash-preview-tts");
        assert_eq!(config.default_voice, "Kore");
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.max_tokens, 5_000);
        assert!(config.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
api_key = "test-key"
default_voice = "Puck"
max_tokens = 2000
"#;
        let config: GttsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_key, Some("test-key".to_string()));
        assert_eq!(config.default_voice, "Puck");
        assert_eq!(config.max_tokens, 2000);
        // Unspecified fields keep their defaults
        assert_eq!(config.model, "gemini-2.5-flash-preview-tts");
    }

    #[test]
    fn test_parse_empty_config() {
        let config: GttsConfig = toml::from_str("").unwrap();
        assert_eq!(config.max_tokens, 5_000);
        assert_eq!(config.default_voice, "Kore");
    }

    #[test]
    fn test_max_tokens_out_of_range() {
        let config = GttsConfig {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GttsConfig {
            max_tokens: MAX_INPUT_TOKENS + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GttsConfig {
            max_tokens: MAX_INPUT_TOKENS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_path() {
        let path = GttsConfig::config_path().unwrap();
        assert!(path.ends_with(".config/gtts/config.toml"));
    }
}
