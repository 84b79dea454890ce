use std::io;

use crate::domain::Workspace;

/// Allocates and removes per-request scratch directories.
pub trait WorkspaceManager: Send + Sync {
    fn create(&self) -> Result<Workspace, WorkspaceError>;

    /// Removes the workspace and everything in it. Failures are logged, never returned.
    fn destroy(&self, workspace: &Workspace);
}

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("workspace creation failed: {0}")]
    CreationFailed(#[from] io::Error),
}
