use std::fmt;

/// Source-language value the front-end sends when detection is left to the transcriber.
pub const AUTO_DETECT: &str = "auto";

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "english"),
    ("no", "norwegian"),
    ("es", "spanish"),
    ("uk", "ukrainian"),
];

/// Lowercased, trimmed language code such as `en` or `no`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_lowercase())
    }

    /// Parses an optional source-language hint. Blank values and `auto` mean "detect".
    pub fn source_hint(raw: Option<&str>) -> Option<Self> {
        raw.map(Self::new)
            .filter(|code| !code.is_empty() && code.as_str() != AUTO_DETECT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// English name used in translation instructions; unknown codes fall back to the code itself.
    pub fn display_name(&self) -> &str {
        LANGUAGE_NAMES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
