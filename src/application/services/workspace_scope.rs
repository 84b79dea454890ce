use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{WorkspaceError, WorkspaceManager};
use crate::domain::Workspace;

/// Owns a workspace for the duration of one pipeline run and destroys it when dropped,
/// whether the run succeeded, failed, panicked or was cancelled mid-await.
pub struct WorkspaceScope {
    manager: Arc<dyn WorkspaceManager>,
    workspace: Workspace,
}

impl WorkspaceScope {
    pub fn acquire(manager: Arc<dyn WorkspaceManager>) -> Result<Self, WorkspaceError> {
        let workspace = manager.create()?;
        tracing::debug!(
            workspace_id = %workspace.id.as_uuid(),
            directory = %workspace.directory().display(),
            "Workspace acquired"
        );
        Ok(Self { manager, workspace })
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn track(&mut self, name: &str) -> PathBuf {
        self.workspace.track(name)
    }
}

impl Drop for WorkspaceScope {
    fn drop(&mut self) {
        self.manager.destroy(&self.workspace);
        tracing::debug!(
            workspace_id = %self.workspace.id.as_uuid(),
            files = self.workspace.files().count(),
            "Workspace released"
        );
    }
}
