use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    pub kind: String,
}

impl ErrorResponse {
    pub fn new(kind: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            stage: None,
            kind: kind.to_string(),
        }
    }

    pub fn with_stage(mut self, stage: &str) -> Self {
        self.stage = Some(stage.to_string());
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Client input problems are 400; backend failures 502; everything else on our side 500.
pub fn status_for(error: &PipelineError) -> StatusCode {
    match error.kind() {
        "ValidationError" => StatusCode::BAD_REQUEST,
        "UpstreamError" | "MalformedResponseError" => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        ErrorResponse::new(self.kind(), self.to_string())
            .with_stage(self.stage().as_str())
            .into_response_with(status)
    }
}
