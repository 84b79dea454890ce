use std::sync::Arc;
use std::time::Duration;

use super::http::build_client;
use crate::application::ports::ProviderSet;
use crate::infrastructure::audio::{LocalWhisperTranscriber, OpenAiWhisperTranscriber};
use crate::infrastructure::llm::ChatCompletionsTranslator;
use crate::infrastructure::speech::{OpenAiSpeechSynthesizer, PiperSynthesizer, VoiceTable};
use crate::presentation::config::{
    CloudProviderSettings, LocalProviderSettings, ProviderFamily, ProvidersSettings,
};

pub struct ProviderSetFactory;

#[derive(Debug, thiserror::Error)]
pub enum ProviderConfigError {
    #[error("missing setting for {family} providers: {key}")]
    MissingSetting { family: ProviderFamily, key: &'static str },
    #[error("invalid request timeout: must be greater than zero")]
    InvalidTimeout,
    #[error("http client initialization failed: {0}")]
    ClientInitialization(String),
}

impl ProviderSetFactory {
    /// Builds the backends of the configured family. Runs once at startup; any gap in the
    /// family's settings is reported here rather than on the first request.
    pub fn create(settings: &ProvidersSettings) -> Result<ProviderSet, ProviderConfigError> {
        if settings.request_timeout_secs == 0 {
            return Err(ProviderConfigError::InvalidTimeout);
        }

        let client = build_client(Duration::from_secs(settings.request_timeout_secs))
            .map_err(|e| ProviderConfigError::ClientInitialization(e.to_string()))?;

        let providers = match settings.family {
            ProviderFamily::Local => Self::local(client, &settings.local)?,
            ProviderFamily::Cloud => Self::cloud(client, &settings.cloud)?,
        };

        tracing::info!(
            family = providers.family,
            transcriber = providers.transcriber.backend(),
            translator = providers.translator.backend(),
            synthesizer = providers.synthesizer.backend(),
            timeout_secs = settings.request_timeout_secs,
            "Provider set created"
        );

        Ok(providers)
    }

    fn local(
        client: reqwest::Client,
        settings: &LocalProviderSettings,
    ) -> Result<ProviderSet, ProviderConfigError> {
        let family = ProviderFamily::Local;
        let whisper_url = required(family, "whisper_url", &settings.whisper_url)?;
        let llama_url = required(family, "llama_url", &settings.llama_url)?;
        let llama_model = required(family, "llama_model", &settings.llama_model)?;
        let piper_url = required(family, "piper_url", &settings.piper_url)?;

        let voices = VoiceTable::piper(optional(&settings.default_voice))
            .with_overrides(&settings.voices);

        Ok(ProviderSet {
            family: family.as_str(),
            transcriber: Arc::new(LocalWhisperTranscriber::new(client.clone(), whisper_url)),
            translator: Arc::new(ChatCompletionsTranslator::new(
                client.clone(),
                "llama",
                llama_url,
                None,
                llama_model.to_string(),
            )),
            synthesizer: Arc::new(PiperSynthesizer::new(client, piper_url, voices)),
        })
    }

    fn cloud(
        client: reqwest::Client,
        settings: &CloudProviderSettings,
    ) -> Result<ProviderSet, ProviderConfigError> {
        let family = ProviderFamily::Cloud;
        let api_key = optional(&settings.api_key)
            .map(String::from)
            .ok_or(ProviderConfigError::MissingSetting {
                family,
                key: "api_key",
            })?;
        let base_url = required(family, "base_url", &settings.base_url)?;
        let transcription_model =
            required(family, "transcription_model", &settings.transcription_model)?;
        let chat_model = required(family, "chat_model", &settings.chat_model)?;
        let speech_model = required(family, "speech_model", &settings.speech_model)?;

        let voices = VoiceTable::openai(optional(&settings.default_voice))
            .with_overrides(&settings.voices);

        Ok(ProviderSet {
            family: family.as_str(),
            transcriber: Arc::new(OpenAiWhisperTranscriber::new(
                client.clone(),
                api_key.clone(),
                base_url,
                transcription_model.to_string(),
            )),
            translator: Arc::new(ChatCompletionsTranslator::new(
                client.clone(),
                "openai-chat",
                base_url,
                Some(api_key.clone()),
                chat_model.to_string(),
            )),
            synthesizer: Arc::new(OpenAiSpeechSynthesizer::new(
                client,
                api_key,
                base_url,
                speech_model.to_string(),
                voices,
            )),
        })
    }
}

fn required<'a>(
    family: ProviderFamily,
    key: &'static str,
    value: &'a str,
) -> Result<&'a str, ProviderConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ProviderConfigError::MissingSetting { family, key });
    }
    Ok(value)
}

fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
