use std::path::PathBuf;

use tolk::domain::{Workspace, WorkspaceId};

#[test]
fn given_workspace_when_file_tracked_then_resolves_inside_directory() {
    let mut workspace = Workspace::new(WorkspaceId::new(), PathBuf::from("/tmp/ws"));

    let path = workspace.track("audio.wav");

    assert_eq!(path, PathBuf::from("/tmp/ws/audio.wav"));
    assert_eq!(workspace.file("audio.wav"), Some(path.as_path()));
}

#[test]
fn given_same_name_tracked_twice_when_listing_then_recorded_once() {
    let mut workspace = Workspace::new(WorkspaceId::new(), PathBuf::from("/tmp/ws"));

    workspace.track("tts.wav");
    workspace.track("tts.wav");

    assert_eq!(workspace.files().count(), 1);
}

#[test]
fn given_untracked_name_when_looked_up_then_absent() {
    let workspace = Workspace::new(WorkspaceId::new(), PathBuf::from("/tmp/ws"));

    assert!(workspace.file("audio.wav").is_none());
    assert_eq!(workspace.path("x"), PathBuf::from("/tmp/ws/x"));
}
