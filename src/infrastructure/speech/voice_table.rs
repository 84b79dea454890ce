use std::collections::HashMap;

use crate::domain::LanguageCode;

pub const PIPER_DEFAULT_VOICE: &str = "en_US-libritts-high";
pub const OPENAI_DEFAULT_VOICE: &str = "alloy";

const PIPER_VOICES: &[(&str, &str)] = &[
    ("en", "en_US-libritts-high"),
    ("no", "no_NO-talesyntese-medium"),
    ("es", "es_ES-carlfm-x_low"),
    ("uk", "uk_UA-lada-x_low"),
];

/// Language → voice lookup with a fallback voice for unmapped languages.
#[derive(Debug, Clone)]
pub struct VoiceTable {
    voices: HashMap<String, String>,
    default_voice: String,
}

impl VoiceTable {
    pub fn new(default_voice: impl Into<String>) -> Self {
        Self {
            voices: HashMap::new(),
            default_voice: default_voice.into(),
        }
    }

    pub fn piper(default_voice: Option<&str>) -> Self {
        let mut table = Self::new(default_voice.unwrap_or(PIPER_DEFAULT_VOICE));
        for (language, voice) in PIPER_VOICES {
            table.insert(language, voice);
        }
        table
    }

    pub fn openai(default_voice: Option<&str>) -> Self {
        Self::new(default_voice.unwrap_or(OPENAI_DEFAULT_VOICE))
    }

    pub fn insert(&mut self, language: &str, voice: &str) {
        self.voices
            .insert(language.trim().to_lowercase(), voice.to_string());
    }

    pub fn with_overrides<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Self {
        for (language, voice) in overrides {
            self.insert(language, voice);
        }
        self
    }

    pub fn voice_for(&self, language: &LanguageCode) -> &str {
        self.voices
            .get(language.as_str())
            .map(String::as_str)
            .unwrap_or(&self.default_voice)
    }

    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }
}
