mod temp_dir_workspace_manager;

pub use temp_dir_workspace_manager::TempDirWorkspaceManager;
