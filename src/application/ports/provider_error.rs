/// Failure of a transcription, translation or synthesis backend call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{backend} returned status {status}: {body}")]
    Upstream {
        backend: &'static str,
        status: u16,
        body: String,
    },
    #[error("{backend} returned an unusable response: {reason}")]
    MalformedResponse {
        backend: &'static str,
        reason: String,
    },
    #[error("{backend} unreachable: {reason}")]
    Unreachable {
        backend: &'static str,
        reason: String,
    },
}

impl ProviderError {
    pub fn backend(&self) -> &'static str {
        match self {
            ProviderError::Upstream { backend, .. }
            | ProviderError::MalformedResponse { backend, .. }
            | ProviderError::Unreachable { backend, .. } => backend,
        }
    }

    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ProviderError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn malformed(backend: &'static str, reason: impl Into<String>) -> Self {
        ProviderError::MalformedResponse {
            backend,
            reason: reason.into(),
        }
    }
}
