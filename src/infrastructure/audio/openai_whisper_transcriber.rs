use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{ProviderError, Transcriber};
use crate::domain::LanguageCode;
use crate::infrastructure::providers::http::{endpoint, unreachable, upstream_error};

const BACKEND: &str = "openai-whisper";

pub struct OpenAiWhisperTranscriber {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl OpenAiWhisperTranscriber {
    pub fn new(client: reqwest::Client, api_key: String, base_url: &str, model: String) -> Self {
        Self {
            client,
            api_key,
            endpoint: endpoint(base_url, "audio/transcriptions"),
            model,
        }
    }
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: Option<String>,
}

#[async_trait]
impl Transcriber for OpenAiWhisperTranscriber {
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

        let mut form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "json")
            .part("file", file_part);
        if let Some(language) = source_language {
            form = form.text("language", language.as_str().to_string());
        }

        tracing::debug!(model = %self.model, "Sending audio to OpenAI Whisper API");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| unreachable(BACKEND, e))?;

        if !response.status().is_success() {
            return Err(upstream_error(BACKEND, response).await);
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(BACKEND, format!("parse response: {}", e)))?;

        let text = result
            .text
            .ok_or_else(|| ProviderError::malformed(BACKEND, "missing `text` field"))?;

        Ok(text.trim().to_string())
    }
}
