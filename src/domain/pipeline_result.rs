use super::ArtifactId;

/// Outcome of a pipeline run where every stage succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    pub transcript: String,
    pub translation: String,
    pub audio_artifact_id: ArtifactId,
}
