use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use super::{TranscodeOptions, WorkspaceScope};
use crate::application::ports::{
    ArtifactStore, ArtifactStoreError, ProcessRunner, ProviderError, ProviderSet, WorkspaceError,
    WorkspaceManager,
};
use crate::domain::{
    LanguageCode, PipelineResult, PipelineStage, PipelineState, TranslationRequest,
};

const NORMALIZED_AUDIO_FILE: &str = "audio.wav";
const SYNTHESIZED_AUDIO_FILE: &str = "tts.wav";

/// Runs transcode → transcribe → translate → synthesize → persist for one request.
///
/// Every run gets its own workspace, released on every exit path. Stages run strictly in
/// order and the first failure aborts the run; nothing is persisted unless all stages
/// succeeded.
pub struct TranslationPipeline {
    providers: ProviderSet,
    process_runner: Arc<dyn ProcessRunner>,
    workspace_manager: Arc<dyn WorkspaceManager>,
    artifact_store: Arc<dyn ArtifactStore>,
    transcode: TranscodeOptions,
}

impl TranslationPipeline {
    pub fn new(
        providers: ProviderSet,
        process_runner: Arc<dyn ProcessRunner>,
        workspace_manager: Arc<dyn WorkspaceManager>,
        artifact_store: Arc<dyn ArtifactStore>,
        transcode: TranscodeOptions,
    ) -> Self {
        Self {
            providers,
            process_runner,
            workspace_manager,
            artifact_store,
            transcode,
        }
    }

    pub fn provider_family(&self) -> &'static str {
        self.providers.family
    }

    pub async fn run(&self, request: TranslationRequest) -> Result<PipelineResult, PipelineError> {
        let started = Instant::now();
        match self.execute(&request).await {
            Ok((outcome, state)) => {
                tracing::info!(
                    state = %state,
                    artifact_id = %outcome.audio_artifact_id,
                    target_language = %request.target_language,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Translation pipeline completed"
                );
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(
                    state = %PipelineState::Failed(e.stage()),
                    kind = e.kind(),
                    error = %e,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Translation pipeline failed"
                );
                Err(e)
            }
        }
    }

    async fn execute(
        &self,
        request: &TranslationRequest,
    ) -> Result<(PipelineResult, PipelineState), PipelineError> {
        validate(request)?;

        let mut state = PipelineState::Received;
        let mut scope = WorkspaceScope::acquire(Arc::clone(&self.workspace_manager))?;

        let normalized_audio = self.transcode(&mut scope, request).await?;
        state = advance(state);

        let transcript = self
            .transcribe(&normalized_audio, request.source_language.as_ref())
            .await?;
        state = advance(state);

        let translation = self
            .translate(
                &transcript,
                &request.target_language,
                request.extra_instructions.as_deref(),
            )
            .await?;
        state = advance(state);

        let synthesized = self
            .synthesize(&mut scope, &translation, &request.target_language)
            .await?;
        state = advance(state);

        let artifact = self.artifact_store.store(&synthesized).await?;
        state = advance(state);

        Ok((
            PipelineResult {
                transcript,
                translation,
                audio_artifact_id: artifact.id,
            },
            state,
        ))
    }

    async fn transcode(
        &self,
        scope: &mut WorkspaceScope,
        request: &TranslationRequest,
    ) -> Result<Vec<u8>, PipelineError> {
        let stage = PipelineStage::Transcode;
        let started = Instant::now();

        let upload_path = scope.track(&upload_name(request));
        tokio::fs::write(&upload_path, &request.audio)
            .await
            .map_err(|e| PipelineError::io(stage, e))?;

        let normalized_path = scope.track(NORMALIZED_AUDIO_FILE);
        let args = self.transcode.arguments(&upload_path, &normalized_path);

        let outcome = self
            .process_runner
            .run(&self.transcode.command, &args, self.transcode.timeout)
            .await;
        if !outcome.is_success() {
            return Err(PipelineError::ProcessFailure(outcome.diagnostic()));
        }

        let normalized = tokio::fs::read(&normalized_path)
            .await
            .map_err(|e| PipelineError::io(stage, e))?;

        tracing::info!(
            upload_bytes = request.audio.len(),
            normalized_bytes = normalized.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Audio transcoded"
        );

        Ok(normalized)
    }

    async fn transcribe(
        &self,
        audio: &[u8],
        source_language: Option<&LanguageCode>,
    ) -> Result<String, PipelineError> {
        let started = Instant::now();
        let transcriber = &self.providers.transcriber;

        let transcript = transcriber
            .transcribe(audio, source_language)
            .await
            .map_err(|e| PipelineError::provider(PipelineStage::Transcribe, e))?;

        tracing::info!(
            backend = transcriber.backend(),
            chars = transcript.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Audio transcribed"
        );

        Ok(transcript)
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &LanguageCode,
        extra_instructions: Option<&str>,
    ) -> Result<String, PipelineError> {
        let started = Instant::now();
        let translator = &self.providers.translator;

        let translation = translator
            .translate(text, target_language, extra_instructions)
            .await
            .map_err(|e| PipelineError::provider(PipelineStage::Translate, e))?;

        tracing::info!(
            backend = translator.backend(),
            target_language = %target_language,
            chars = translation.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Transcript translated"
        );

        Ok(translation)
    }

    async fn synthesize(
        &self,
        scope: &mut WorkspaceScope,
        text: &str,
        target_language: &LanguageCode,
    ) -> Result<PathBuf, PipelineError> {
        let stage = PipelineStage::Synthesize;
        let started = Instant::now();
        let synthesizer = &self.providers.synthesizer;
        let backend = synthesizer.backend();

        let mut audio = synthesizer
            .synthesize(text, target_language)
            .await
            .map_err(|e| PipelineError::provider(stage, e))?;

        let output_path = scope.track(SYNTHESIZED_AUDIO_FILE);
        let mut file = tokio::fs::File::create(&output_path)
            .await
            .map_err(|e| PipelineError::io(stage, e))?;

        let mut written: u64 = 0;
        while let Some(chunk) = audio.next().await {
            let chunk = chunk.map_err(|e| {
                PipelineError::provider(
                    stage,
                    ProviderError::Unreachable {
                        backend,
                        reason: format!("audio stream interrupted: {}", e),
                    },
                )
            })?;
            file.write_all(&chunk)
                .await
                .map_err(|e| PipelineError::io(stage, e))?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(|e| PipelineError::io(stage, e))?;

        if written == 0 {
            return Err(PipelineError::provider(
                stage,
                ProviderError::malformed(backend, "empty audio body"),
            ));
        }

        tracing::info!(
            backend,
            bytes = written,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Speech synthesized"
        );

        Ok(output_path)
    }
}

fn validate(request: &TranslationRequest) -> Result<(), PipelineError> {
    if request.audio.is_empty() {
        return Err(PipelineError::Validation("missing audio".to_string()));
    }
    if request.target_language.is_empty() {
        return Err(PipelineError::Validation(
            "missing target language".to_string(),
        ));
    }
    Ok(())
}

fn advance(state: PipelineState) -> PipelineState {
    let next = state.advance().unwrap_or(state);
    tracing::debug!(from = %state, to = %next, "Pipeline state advanced");
    next
}

/// Upload name that cannot collide with the files the pipeline itself produces.
fn upload_name(request: &TranslationRequest) -> String {
    let name = request.upload_file_name();
    if name == NORMALIZED_AUDIO_FILE || name == SYNTHESIZED_AUDIO_FILE {
        format!("upload-{}", name)
    } else {
        name
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("transcoding failed: {0}")]
    ProcessFailure(String),
    #[error("{stage} failed: {source}")]
    Provider {
        stage: PipelineStage,
        #[source]
        source: ProviderError,
    },
    #[error("{stage} failed: {source}")]
    Io {
        stage: PipelineStage,
        #[source]
        source: io::Error,
    },
    #[error("workspace unavailable: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("persisting audio failed: {0}")]
    Persist(#[from] ArtifactStoreError),
}

impl PipelineError {
    fn provider(stage: PipelineStage, source: ProviderError) -> Self {
        PipelineError::Provider { stage, source }
    }

    fn io(stage: PipelineStage, source: io::Error) -> Self {
        PipelineError::Io { stage, source }
    }

    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::Validation(_) => PipelineStage::Validation,
            PipelineError::ProcessFailure(_) | PipelineError::Workspace(_) => {
                PipelineStage::Transcode
            }
            PipelineError::Provider { stage, .. } | PipelineError::Io { stage, .. } => *stage,
            PipelineError::Persist(_) => PipelineStage::Persist,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Validation(_) => "ValidationError",
            PipelineError::ProcessFailure(_) => "ProcessFailure",
            PipelineError::Provider { source, .. } => match source {
                ProviderError::MalformedResponse { .. } => "MalformedResponseError",
                ProviderError::Upstream { .. } | ProviderError::Unreachable { .. } => {
                    "UpstreamError"
                }
            },
            PipelineError::Io { .. } | PipelineError::Workspace(_) | PipelineError::Persist(_) => {
                "InternalError"
            }
        }
    }
}
