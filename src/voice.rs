//! The closed set of Gemini prebuilt voices.
//!
//! Voice names are validated here, at the boundary, so a typo fails before
//! any network call is made.

use std::fmt;
use std::str::FromStr;

use crate::error::TtsError;

/// A Gemini prebuilt voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    Zephyr,
    Puck,
    Charon,
    Kore,
    Fenrir,
    Leda,
    Orus,
    Aoede,
    Callirrhoe,
    Autonoe,
    Enceladus,
    Iapetus,
    Umbriel,
    Algieba,
    Despina,
    Erinome,
    Algenib,
    Rasalgethi,
    Laomedeia,
    Achernar,
    Alnilam,
    Schedar,
    Gacrux,
    Pulcherrima,
    Achird,
    Zubenelgenubi,
    Vindemiatrix,
    Sadachbia,
    Sadaltager,
    Sulafat,
}

impl Voice {
    /// All available voices, in the order the service documents them.
    pub const ALL: [Voice; 30] = [
        Voice::Zephyr,
        Voice::Puck,
        Voice::Charon,
        Voice::Kore,
        Voice::Fenrir,
        Voice::Leda,
        Voice::Orus,
        Voice::Aoede,
        Voice::Callirrhoe,
        Voice::Autonoe,
        Voice::Enceladus,
        Voice::Iapetus,
        Voice::Umbriel,
        Voice::Algieba,
        Voice::Despina,
        Voice::Erinome,
        Voice::Algenib,
        Voice::Rasalgethi,
        Voice::Laomedeia,
        Voice::Achernar,
        Voice::Alnilam,
        Voice::Schedar,
        Voice::Gacrux,
        Voice::Pulcherrima,
        Voice::Achird,
        Voice::Zubenelgenubi,
        Voice::Vindemiatrix,
        Voice::Sadachbia,
        Voice::Sadaltager,
        Voice::Sulafat,
    ];

    /// The exact name the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Zephyr => "Zephyr",
            Voice::Puck => "Puck",
            Voice::Charon => "Charon",
            Voice::Kore => "Kore",
            Voice::Fenrir => "Fenrir",
            Voice::Leda => "Leda",
            Voice::Orus => "Orus",
            Voice::Aoede => "Aoede",
            Voice::Callirrhoe => "Callirrhoe",
            Voice::Autonoe => "Autonoe",
            Voice::Enceladus => "Enceladus",
            Voice::Iapetus => "Iapetus",
            Voice::Umbriel => "Umbriel",
            Voice::Algieba => "Algieba",
            Voice::Despina => "Despina",
            Voice::Erinome => "Erinome",
            Voice::Algenib => "Algenib",
            Voice::Rasalgethi => "Rasalgethi",
            Voice::Laomedeia => "Laomedeia",
            Voice::Achernar => "Achernar",
            Voice::Alnilam => "Alnilam",
            Voice::Schedar => "Schedar",
            Voice::Gacrux => "Gacrux",
            Voice::Pulcherrima => "Pulcherrima",
            Voice::Achird => "Achird",
            Voice::Zubenelgenubi => "Zubenelgenubi",
            Voice::Vindemiatrix => "Vindemiatrix",
            Voice::Sadachbia => "Sadachbia",
            Voice::Sadaltager => "Sadaltager",
            Voice::Sulafat => "Sulafat",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Voice {
    type Err = TtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TtsError::UnknownVoice(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_voices_count() {
        assert_eq!(Voice::ALL.len(), 30);
    }

    #[test]
    fn test_parse_known_voice() {
        assert_eq!("Puck".parse::<Voice>().unwrap(), Voice::Puck);
        assert_eq!("kore".parse::<Voice>().unwrap(), Voice::Kore);
    }

    #[test]
    fn test_parse_unknown_voice() {
        let err = "Bogus".parse::<Voice>().unwrap_err();
        assert!(matches!(err, TtsError::UnknownVoice(ref name) if name == "Bogus"));
    }

    #[test]
    fn test_round_trip() {
        for voice in Voice::ALL {
            assert_eq!(voice.as_str().parse::<Voice>().unwrap(), voice);
        }
    }
}
