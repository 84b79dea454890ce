use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;

use super::VoiceTable;
use crate::application::ports::{AudioStream, ProviderError, Synthesizer};
use crate::domain::LanguageCode;
use crate::infrastructure::providers::http::{endpoint, unreachable, upstream_error};

const BACKEND: &str = "piper";

/// Self-hosted Piper HTTP service: `POST /tts` with `{ text, voice }`, WAV bytes back.
pub struct PiperSynthesizer {
    client: reqwest::Client,
    endpoint: String,
    voices: VoiceTable,
}

#[derive(Serialize)]
struct PiperRequest<'a> {
    text: &'a str,
    voice: &'a str,
}

impl PiperSynthesizer {
    pub fn new(client: reqwest::Client, base_url: &str, voices: VoiceTable) -> Self {
        Self {
            client,
            endpoint: endpoint(base_url, "tts"),
            voices,
        }
    }
}

#[async_trait]
impl Synthesizer for PiperSynthesizer {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn synthesize(
        &self,
        text: &str,
        target_language: &LanguageCode,
    ) -> Result<AudioStream, ProviderError> {
        let voice = self.voices.voice_for(target_language);

        tracing::debug!(voice, chars = text.len(), "Sending text to Piper");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PiperRequest { text, voice })
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
