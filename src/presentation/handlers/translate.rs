use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

use super::error::ErrorResponse;
use crate::domain::{LanguageCode, PipelineStage, TranslationRequest};
use crate::presentation::state::AppState;

pub const AUDIO_ROUTE_PREFIX: &str = "/api/translate/audio";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub transcript: String,
    pub translation: String,
    pub audio_url: String,
}

#[derive(Default)]
struct TranslateForm {
    audio: Option<(String, Bytes)>,
    source_lang: Option<String>,
    target_lang: Option<String>,
    prompt: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn translate_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Request is not multipart/form-data");
            return ErrorResponse::new("ValidationError", rejection.body_text())
                .with_stage(PipelineStage::Validation.as_str())
                .into_response_with(rejection.status());
        }
    };

    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            // 413 when the upload exceeds the body limit, 400 for anything else malformed.
            let status = e.status();
            tracing::warn!(error = %e, status = %status, "Failed to read multipart");
            return ErrorResponse::new("ValidationError", format!("Failed to read multipart: {}", e))
                .with_stage(PipelineStage::Validation.as_str())
                .into_response_with(status);
        }
    };

    let (file_name, audio) = form.audio.unwrap_or_default();

    tracing::debug!(
        filename = %file_name,
        bytes = audio.len(),
        source_lang = form.source_lang.as_deref().unwrap_or("auto"),
        target_lang = form.target_lang.as_deref().unwrap_or(""),
        "Translation request received"
    );

    let request = TranslationRequest::new(
        audio,
        file_name,
        LanguageCode::source_hint(form.source_lang.as_deref()),
        LanguageCode::new(form.target_lang.unwrap_or_default()),
        form.prompt,
    );

    match state.pipeline.run(request).await {
        Ok(result) => (
            StatusCode::OK,
            Json(TranslateResponse {
                audio_url: format!("{}/{}", AUDIO_ROUTE_PREFIX, result.audio_artifact_id),
                transcript: result.transcript,
                translation: result.translation,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

async fn read_form(mut multipart: Multipart) -> Result<TranslateForm, MultipartError> {
    let mut form = TranslateForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("audio") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                form.audio = Some((file_name, data));
            }
            Some("sourceLang") => form.source_lang = Some(field.text().await?),
            Some("targetLang") => form.target_lang = Some(field.text().await?),
            Some("prompt") => form.prompt = Some(field.text().await?),
            other => tracing::debug!(field = ?other, "Ignoring unknown multipart field"),
        }
    }

    Ok(form)
}
