use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::translation_instructions;
use crate::application::ports::{ProviderError, Translator};
use crate::domain::LanguageCode;
use crate::infrastructure::observability::sanitize_prompt;
use crate::infrastructure::providers::http::{endpoint, unreachable, upstream_error};

const TEMPERATURE: f32 = 0.2;

/// Translator over an OpenAI-compatible `/chat/completions` endpoint. Serves both the
/// local llama.cpp server and the cloud API; only the base URL, model and key differ.
pub struct ChatCompletionsTranslator {
    client: reqwest::Client,
    backend: &'static str,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl ChatCompletionsTranslator {
    pub fn new(
        client: reqwest::Client,
        backend: &'static str,
        base_url: &str,
        api_key: Option<String>,
        model: String,
    ) -> Self {
        Self {
            client,
            backend,
            endpoint: endpoint(base_url, "chat/completions"),
            api_key: api_key.filter(|k| !k.is_empty()),
            model,
        }
    }

    fn build_messages(
        &self,
        text: &str,
        target_language: &LanguageCode,
        extra_instructions: Option<&str>,
    ) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: Some(translation_instructions(target_language, extra_instructions)),
            },
            ChatMessage {
                role: "user".to_string(),
                content: Some(text.to_string()),
            },
        ]
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl Translator for ChatCompletionsTranslator {
    fn backend(&self) -> &'static str {
        self.backend
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &LanguageCode,
        extra_instructions: Option<&str>,
    ) -> Result<String, ProviderError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: self.build_messages(text, target_language, extra_instructions),
            temperature: TEMPERATURE,
        };

        tracing::debug!(
            backend = self.backend,
            model = %self.model,
            target_language = %target_language,
            extra_instructions = %sanitize_prompt(extra_instructions.unwrap_or_default()),
            "Sending translation request"
        );

        let request = self.client.post(&self.endpoint).json(&request_body);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| unreachable(self.backend, e))?;

        if !response.status().is_success() {
            return Err(upstream_error(self.backend, response).await);
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::malformed(self.backend, format!("parse response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| ProviderError::malformed(self.backend, "no message in choices"))
    }
}
