use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use super::error::ErrorResponse;
use crate::application::ports::ArtifactStoreError;
use crate::domain::ArtifactId;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state))]
pub async fn audio_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(artifact_id) = ArtifactId::parse(&id) else {
        return not_found(&id);
    };

    match state.artifact_store.retrieve(&artifact_id).await {
        Ok((data, content_type)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type.as_mime())],
            data,
        )
            .into_response(),
        Err(ArtifactStoreError::NotFound(_)) => not_found(&id),
        Err(e) => {
            tracing::error!(error = %e, artifact_id = %artifact_id, "Failed to read artifact");
            ErrorResponse::new("InternalError", format!("Failed to read audio: {}", e))
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn not_found(id: &str) -> Response {
    ErrorResponse::new("NotFoundError", format!("Audio not found: {}", id))
        .into_response_with(StatusCode::NOT_FOUND)
}
