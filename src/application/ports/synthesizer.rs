use std::io;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use super::ProviderError;
use crate::domain::LanguageCode;

/// Synthesized audio as it arrives from the backend.
pub type AudioStream = BoxStream<'static, Result<Bytes, io::Error>>;

#[async_trait]
pub trait Synthesizer: Send + Sync {
    fn backend(&self) -> &'static str;

    /// Starts synthesis once the backend has accepted the request; the body is streamed.
    async fn synthesize(
        &self,
        text: &str,
        target_language: &LanguageCode,
    ) -> Result<AudioStream, ProviderError>;
}
