use std::time::Duration;

use crate::application::ports::ProviderError;

pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .build()
}

/// Joins a configured base URL and an endpoint path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub(crate) async fn upstream_error(
    backend: &'static str,
    response: reqwest::Response,
) -> ProviderError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    ProviderError::Upstream {
        backend,
        status,
        body,
    }
}

pub(crate) fn unreachable(backend: &'static str, error: reqwest::Error) -> ProviderError {
    let reason = if error.is_timeout() {
        format!("request timed out: {}", error)
    } else {
        format!("request: {}", error)
    };
    ProviderError::Unreachable { backend, reason }
}
