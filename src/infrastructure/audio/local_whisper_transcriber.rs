use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{ProviderError, Transcriber};
use crate::domain::LanguageCode;
use crate::infrastructure::providers::http::{endpoint, unreachable, upstream_error};

const BACKEND: &str = "local-whisper";

/// Self-hosted faster-whisper service: `POST /transcribe` with an `audio` file part.
pub struct LocalWhisperTranscriber {
    client: reqwest::Client,
    endpoint: String,
}

impl LocalWhisperTranscriber {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: endpoint(base_url, "transcribe"),
        }
    }
}

#[derive(Deserialize)]
struct WhisperServiceResponse {
    text: Option<String>,
    language: Option<String>,
}

#[async_trait]
impl Transcriber for LocalWhisperTranscriber {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn transcribe(
        &self,
        audio: &[u8],
        source_language: Option<&LanguageCode>,
    ) -> Result<String, ProviderError> {
        let file_part = multipart::Part::bytes(audio.to_vec())
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| unreachable(BACKEND, e))?;

        let mut form = multipart::Form::new().part("audio", file_part);
        if let Some(language) = source_language {
            form = form.text("sourceLang", language.as_str().to_string());
        }

        tracing::debug!(endpoint = %self.endpoint, bytes = audio.len(), "Sending audio to local Whisper");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| unreachable(BACKEND, e))?;

        if !response.status().is_success() {
            return Err(upstream_error(BACKEND, response).await);
        }

        let result: WhisperServiceResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(BACKEND, format!("parse response: {}", e)))?;

        let text = result
            .text
            .ok_or_else(|| ProviderError::malformed(BACKEND, "missing `text` field"))?;

        tracing::debug!(
            detected_language = result.language.as_deref().unwrap_or("unknown"),
            "Local Whisper detected language"
        );

        Ok(text.trim().to_string())
    }
}
