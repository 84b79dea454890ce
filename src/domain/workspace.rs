use std::path::{Path, PathBuf};

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkspaceId(Uuid);

impl WorkspaceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for WorkspaceId {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-request scratch directory and the files produced in it so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: WorkspaceId,
    directory: PathBuf,
    files: Vec<(String, PathBuf)>,
}

impl Workspace {
    pub fn new(id: WorkspaceId, directory: PathBuf) -> Self {
        Self {
            id,
            directory,
            files: Vec::new(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }

    /// Resolves `name` inside the workspace and records it as produced.
    pub fn track(&mut self, name: &str) -> PathBuf {
        let path = self.path(name);
        if !self.files.iter().any(|(existing, _)| existing == name) {
            self.files.push((name.to_string(), path.clone()));
        }
        path
    }

    pub fn file(&self, name: &str) -> Option<&Path> {
        self.files
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, path)| path.as_path())
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.files
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }
}
