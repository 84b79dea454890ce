use std::path::Path;

use bytes::Bytes;

use super::LanguageCode;

const FALLBACK_UPLOAD_NAME: &str = "upload.bin";

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub audio: Bytes,
    pub original_file_name: String,
    pub source_language: Option<LanguageCode>,
    pub target_language: LanguageCode,
    pub extra_instructions: Option<String>,
}

impl TranslationRequest {
    pub fn new(
        audio: Bytes,
        original_file_name: impl Into<String>,
        source_language: Option<LanguageCode>,
        target_language: LanguageCode,
        extra_instructions: Option<String>,
    ) -> Self {
        Self {
            audio,
            original_file_name: original_file_name.into(),
            source_language,
            target_language,
            extra_instructions: extra_instructions
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    /// File name for the raw upload inside a workspace. Directory components from the
    /// client are discarded.
    pub fn upload_file_name(&self) -> String {
        Path::new(self.original_file_name.trim())
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty() && *name != "." && *name != "..")
            .map(String::from)
            .unwrap_or_else(|| FALLBACK_UPLOAD_NAME.to_string())
    }
}
