use async_trait::async_trait;

use super::ProviderError;
use crate::domain::LanguageCode;

#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Short backend name used in logs and error messages.
    fn backend(&self) -> &'static str;

    async fn transcribe(
        &self,
        audio: &[u8],
        source_language: Option<&LanguageCode>,
    ) -> Result<String, ProviderError>;
}
