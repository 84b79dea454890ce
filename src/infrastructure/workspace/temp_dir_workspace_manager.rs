use std::io;
use std::path::{Path, PathBuf};

use crate::application::ports::{WorkspaceError, WorkspaceManager};
use crate::domain::{Workspace, WorkspaceId};

/// Creates one directory per workspace under a shared root.
pub struct TempDirWorkspaceManager {
    root: PathBuf,
}

impl TempDirWorkspaceManager {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl WorkspaceManager for TempDirWorkspaceManager {
    fn create(&self) -> Result<Workspace, WorkspaceError> {
        let id = WorkspaceId::new();
        let directory = self.root.join(id.as_uuid().to_string());

        // create_dir_all tolerates the root being created concurrently.
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir(&directory)?;

        Ok(Workspace::new(id, directory))
    }

    fn destroy(&self, workspace: &Workspace) {
        match std::fs::remove_dir_all(workspace.directory()) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    workspace_id = %workspace.id.as_uuid(),
                    directory = %workspace.directory().display(),
                    error = %e,
                    "Failed to remove workspace"
                );
            }
        }
    }
}
