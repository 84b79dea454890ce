use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;

use super::VoiceTable;
use crate::application::ports::{AudioStream, ProviderError, Synthesizer};
use crate::domain::LanguageCode;
use crate::infrastructure::providers::http::{endpoint, unreachable, upstream_error};

const BACKEND: &str = "openai-speech";

pub struct OpenAiSpeechSynthesizer {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    voices: VoiceTable,
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'static str,
}

impl OpenAiSpeechSynthesizer {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: &str,
        model: String,
        voices: VoiceTable,
    ) -> Self {
        Self {
            client,
            api_key,
            endpoint: endpoint(base_url, "audio/speech"),
            model,
            voices,
        }
    }
}

#[async_trait]
impl Synthesizer for OpenAiSpeechSynthesizer {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn synthesize(
        &self,
        text: &str,
        target_language: &LanguageCode,
    ) -> Result<AudioStream, ProviderError> {
        let body = SpeechRequest {
            model: &self.model,
            input: text,
            voice: self.voices.voice_for(target_language),
            response_format: "wav",
        };

        tracing::debug!(model = %self.model, voice = body.voice, "Sending text to OpenAI speech API");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| unreachable(BACKEND, e))?;

        if !response.status().is_success() {
            return Err(upstream_error(BACKEND, response).await);
        }

        Ok(response
            .bytes_stream()
            .map_err(std::io::Error::other)
            .boxed())
    }
}
