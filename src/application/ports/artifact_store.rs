use std::io;
use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{Artifact, ArtifactId, AudioContentType};

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Moves `source` into the store under a freshly generated id.
    async fn store(&self, source: &Path) -> Result<Artifact, ArtifactStoreError>;

    async fn retrieve(
        &self,
        id: &ArtifactId,
    ) -> Result<(Bytes, AudioContentType), ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("store failed: {0}")]
    StoreFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
