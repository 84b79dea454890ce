use std::sync::Arc;

use tempfile::TempDir;
use tolk::application::ports::{ArtifactStore, ArtifactStoreError};
use tolk::domain::{ArtifactId, AudioContentType};
use tolk::infrastructure::storage::LocalArtifactStore;

fn setup() -> (TempDir, LocalArtifactStore) {
    let dir = TempDir::new().unwrap();
    let store = LocalArtifactStore::new(dir.path().join("audio")).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_synthesized_file_when_stored_then_moved_under_generated_id() {
    let (dir, store) = setup();
    let source = dir.path().join("tts.wav");
    std::fs::write(&source, b"RIFF-data").unwrap();

    let artifact = store.store(&source).await.unwrap();

    assert!(!source.exists());
    assert_eq!(
        artifact.file_path,
        store.root().join(format!("{}.wav", artifact.id))
    );
    assert_eq!(std::fs::read(&artifact.file_path).unwrap(), b"RIFF-data");
    assert_eq!(artifact.content_type, AudioContentType::Wav);
}

#[tokio::test]
async fn given_stored_artifact_when_retrieved_twice_then_bytes_are_identical() {
    let (dir, store) = setup();
    let source = dir.path().join("tts.wav");
    std::fs::write(&source, b"RIFF-data").unwrap();
    let artifact = store.store(&source).await.unwrap();

    let first = store.retrieve(&artifact.id).await.unwrap();
    let second = store.retrieve(&artifact.id).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.0.as_ref(), b"RIFF-data");
    assert_eq!(first.1.as_mime(), "audio/wav");
}

#[tokio::test]
async fn given_mp3_source_when_stored_then_served_as_mpeg() {
    let (dir, store) = setup();
    let source = dir.path().join("speech.mp3");
    std::fs::write(&source, b"ID3").unwrap();

    let artifact = store.store(&source).await.unwrap();
    let (_, content_type) = store.retrieve(&artifact.id).await.unwrap();

    assert_eq!(content_type, AudioContentType::Mpeg);
}

#[tokio::test]
async fn given_unknown_id_when_retrieved_then_not_found() {
    let (_dir, store) = setup();

    let result = store.retrieve(&ArtifactId::new()).await;

    assert!(matches!(result, Err(ArtifactStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_root_removed_after_startup_when_storing_then_recreated() {
    let (dir, store) = setup();
    std::fs::remove_dir_all(store.root()).unwrap();
    let source = dir.path().join("tts.wav");
    std::fs::write(&source, b"RIFF").unwrap();

    let artifact = store.store(&source).await.unwrap();

    assert!(artifact.file_path.exists());
}

#[tokio::test]
async fn given_missing_source_when_storing_then_store_failed() {
    let (dir, store) = setup();

    let result = store.store(&dir.path().join("missing.wav")).await;

    assert!(matches!(result, Err(ArtifactStoreError::StoreFailed(_))));
}

#[tokio::test]
async fn given_concurrent_stores_when_finished_then_ids_are_distinct() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(LocalArtifactStore::new(dir.path().join("audio")).unwrap());

    let mut handles = Vec::new();
    for i in 0..8 {
        let source = dir.path().join(format!("tts-{}.wav", i));
        std::fs::write(&source, format!("audio-{}", i)).unwrap();
        let store = store.clone();
        handles.push(tokio::spawn(async move { store.store(&source).await }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids.dedup();

    assert_eq!(ids.len(), 8);
}
