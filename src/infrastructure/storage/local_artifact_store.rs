use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::{Artifact, ArtifactId, AudioContentType};

/// Keeps synthesized audio as `{id}.{ext}` files in one directory. No expiry.
pub struct LocalArtifactStore {
    root: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(root: PathBuf) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&root).map_err(ArtifactStoreError::Io)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn artifact_path(&self, id: &ArtifactId, content_type: AudioContentType) -> PathBuf {
        self.root
            .join(format!("{}.{}", id.as_str(), content_type.extension()))
    }
}

#[async_trait::async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn store(&self, source: &Path) -> Result<Artifact, ArtifactStoreError> {
        // The root may have been removed by an external purge since startup.
        tokio::fs::create_dir_all(&self.root).await?;

        let id = ArtifactId::new();
        let content_type = AudioContentType::from_path(source);
        let destination = self.artifact_path(&id, content_type);

        move_file(source, &destination).await.map_err(|e| {
            ArtifactStoreError::StoreFailed(format!(
                "move {} -> {}: {}",
                source.display(),
                destination.display(),
                e
            ))
        })?;

        tracing::debug!(
            artifact_id = %id,
            path = %destination.display(),
            content_type = content_type.as_mime(),
            "Artifact stored"
        );

        Ok(Artifact {
            id,
            file_path: destination,
            content_type,
        })
    }

    async fn retrieve(
        &self,
        id: &ArtifactId,
    ) -> Result<(Bytes, AudioContentType), ArtifactStoreError> {
        for content_type in AudioContentType::ALL {
            let path = self.artifact_path(id, content_type);
            match tokio::fs::read(&path).await {
                Ok(data) => return Ok((Bytes::from(data), content_type)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(ArtifactStoreError::Io(e)),
            }
        }

        Err(ArtifactStoreError::NotFound(id.to_string()))
    }
}

/// Rename, falling back to copy + delete when the paths are on different filesystems.
async fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    if tokio::fs::rename(source, destination).await.is_ok() {
        return Ok(());
    }

    tokio::fs::copy(source, destination).await?;
    if let Err(e) = tokio::fs::remove_file(source).await {
        tracing::warn!(path = %source.display(), error = %e, "Failed to remove moved source file");
    }
    Ok(())
}
