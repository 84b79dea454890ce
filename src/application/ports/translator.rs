use async_trait::async_trait;

use super::ProviderError;
use crate::domain::LanguageCode;

#[async_trait]
pub trait Translator: Send + Sync {
    fn backend(&self) -> &'static str;

    async fn translate(
        &self,
        text: &str,
        target_language: &LanguageCode,
        extra_instructions: Option<&str>,
    ) -> Result<String, ProviderError>;
}
