use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tolk::application::ports::{ArtifactStore, ProcessOutcome};
use tolk::domain::{AudioContentType, LanguageCode, PipelineStage, TranslationRequest};

use crate::helpers::fakes::{
    CopyingProcessRunner, FakeSynthesizer, FakeTranscriber, FakeTranslator, FixedOutcomeRunner,
    PipelineFixture, SYNTHESIZED_AUDIO, provider_set, upload_request,
};

struct Fakes {
    transcriber: Arc<FakeTranscriber>,
    translator: Arc<FakeTranslator>,
    synthesizer: Arc<FakeSynthesizer>,
    runner: Arc<CopyingProcessRunner>,
}

impl Fakes {
    fn new(
        transcriber: FakeTranscriber,
        translator: FakeTranslator,
        synthesizer: FakeSynthesizer,
    ) -> Self {
        Self {
            transcriber: Arc::new(transcriber),
            translator: Arc::new(translator),
            synthesizer: Arc::new(synthesizer),
            runner: Arc::new(CopyingProcessRunner::default()),
        }
    }

    fn happy() -> Self {
        Self::new(
            FakeTranscriber::returning("hello world"),
            FakeTranslator::returning("hei verden"),
            FakeSynthesizer::returning(SYNTHESIZED_AUDIO),
        )
    }

    fn fixture(&self) -> PipelineFixture {
        PipelineFixture::new(
            provider_set(
                self.transcriber.clone(),
                self.translator.clone(),
                self.synthesizer.clone(),
            ),
            self.runner.clone(),
        )
    }
}

#[tokio::test]
async fn given_valid_upload_when_run_then_returns_transcript_translation_and_stored_audio() {
    let fakes = Fakes::happy();
    let fixture = fakes.fixture();

    let result = fixture.pipeline.run(upload_request("no")).await.unwrap();

    assert_eq!(result.transcript, "hello world");
    assert_eq!(result.translation, "hei verden");

    let (audio, content_type) = fixture
        .artifact_store
        .retrieve(&result.audio_artifact_id)
        .await
        .unwrap();
    assert_eq!(audio.as_ref(), SYNTHESIZED_AUDIO);
    assert_eq!(content_type, AudioContentType::Wav);
}

#[tokio::test]
async fn given_successful_run_when_finished_then_no_workspace_remains() {
    let fakes = Fakes::happy();
    let fixture = fakes.fixture();

    fixture.pipeline.run(upload_request("no")).await.unwrap();

    assert_eq!(fixture.workspace_entries(), 0);
    assert_eq!(fixture.artifact_entries(), 1);
}

#[tokio::test]
async fn given_successful_run_when_transcoding_then_output_is_normalized_wav_in_workspace() {
    let fakes = Fakes::happy();
    let fixture = fakes.fixture();

    fixture.pipeline.run(upload_request("en")).await.unwrap();

    let args = fakes.runner.last_args();
    assert_eq!(fakes.runner.calls(), 1);
    assert!(args.last().unwrap().ends_with("audio.wav"));
    assert!(args.iter().any(|a| a.ends_with("recording.webm")));
    assert!(
        args.last()
            .unwrap()
            .starts_with(fixture.workspace_root.to_str().unwrap())
    );
}

#[tokio::test]
async fn given_missing_audio_when_run_then_fails_validation_before_any_work() {
    let fakes = Fakes::happy();
    let fixture = fakes.fixture();
    let request = TranslationRequest::new(
        Bytes::new(),
        "empty.webm",
        None,
        LanguageCode::new("no"),
        None,
    );

    let error = fixture.pipeline.run(request).await.unwrap_err();

    assert_eq!(error.kind(), "ValidationError");
    assert_eq!(error.stage(), PipelineStage::Validation);
    assert_eq!(fakes.runner.calls(), 0);
    assert_eq!(fakes.transcriber.calls(), 0);
    assert_eq!(fixture.workspace_entries(), 0);
}

#[tokio::test]
async fn given_blank_target_language_when_run_then_fails_validation() {
    let fakes = Fakes::happy();
    let fixture = fakes.fixture();

    let error = fixture.pipeline.run(upload_request("  ")).await.unwrap_err();

    assert_eq!(error.kind(), "ValidationError");
    assert!(error.to_string().contains("target language"));
}

#[tokio::test]
async fn given_transcriber_failure_when_run_then_reports_transcribe_stage_and_persists_nothing() {
    let fakes = Fakes::new(
        FakeTranscriber::failing(),
        FakeTranslator::returning("unused"),
        FakeSynthesizer::returning(SYNTHESIZED_AUDIO),
    );
    let fixture = fakes.fixture();

    let error = fixture.pipeline.run(upload_request("no")).await.unwrap_err();

    assert_eq!(error.stage(), PipelineStage::Transcribe);
    assert_eq!(error.kind(), "UpstreamError");
    assert_eq!(fakes.translator.calls(), 0);
    assert_eq!(fakes.synthesizer.calls(), 0);
    assert_eq!(fixture.workspace_entries(), 0);
    assert_eq!(fixture.artifact_entries(), 0);
}

#[tokio::test]
async fn given_translator_failure_when_run_then_synthesis_never_starts() {
    let fakes = Fakes::new(
        FakeTranscriber::returning("hello"),
        FakeTranslator::failing(),
        FakeSynthesizer::returning(SYNTHESIZED_AUDIO),
    );
    let fixture = fakes.fixture();

    let error = fixture.pipeline.run(upload_request("es")).await.unwrap_err();

    assert_eq!(error.stage(), PipelineStage::Translate);
    assert_eq!(fakes.synthesizer.calls(), 0);
    assert_eq!(fixture.artifact_entries(), 0);
}

#[tokio::test]
async fn given_transcoder_times_out_when_run_then_process_failure_and_workspace_removed() {
    let transcriber = Arc::new(FakeTranscriber::returning("unused"));
    let fixture = PipelineFixture::new(
        provider_set(
            transcriber.clone(),
            Arc::new(FakeTranslator::returning("unused")),
            Arc::new(FakeSynthesizer::returning(SYNTHESIZED_AUDIO)),
        ),
        Arc::new(FixedOutcomeRunner(ProcessOutcome::TimedOut {
            after: Duration::from_secs(30),
        })),
    );

    let error = fixture.pipeline.run(upload_request("no")).await.unwrap_err();

    assert_eq!(error.kind(), "ProcessFailure");
    assert_eq!(error.stage(), PipelineStage::Transcode);
    assert!(error.to_string().contains("timed out"));
    assert_eq!(transcriber.calls(), 0);
    assert_eq!(fixture.workspace_entries(), 0);
}

#[tokio::test]
async fn given_transcoder_rejects_input_when_run_then_stderr_is_reported() {
    let fixture = PipelineFixture::new(
        provider_set(
            Arc::new(FakeTranscriber::returning("unused")),
            Arc::new(FakeTranslator::returning("unused")),
            Arc::new(FakeSynthesizer::returning(SYNTHESIZED_AUDIO)),
        ),
        Arc::new(FixedOutcomeRunner(ProcessOutcome::Exited {
            code: Some(1),
            stderr: "Invalid data found when processing input".to_string(),
        })),
    );

    let error = fixture.pipeline.run(upload_request("no")).await.unwrap_err();

    assert_eq!(error.kind(), "ProcessFailure");
    assert!(error.to_string().contains("Invalid data found"));
}

#[tokio::test]
async fn given_empty_synthesized_audio_when_run_then_malformed_response_and_nothing_stored() {
    let fakes = Fakes::new(
        FakeTranscriber::returning("hello"),
        FakeTranslator::returning("hola"),
        FakeSynthesizer::empty(),
    );
    let fixture = fakes.fixture();

    let error = fixture.pipeline.run(upload_request("es")).await.unwrap_err();

    assert_eq!(error.stage(), PipelineStage::Synthesize);
    assert_eq!(error.kind(), "MalformedResponseError");
    assert_eq!(fixture.artifact_entries(), 0);
    assert_eq!(fixture.workspace_entries(), 0);
}

#[tokio::test]
async fn given_audio_stream_interrupted_when_run_then_upstream_error_and_nothing_stored() {
    let fakes = Fakes::new(
        FakeTranscriber::returning("hello"),
        FakeTranslator::returning("hola"),
        FakeSynthesizer::interrupted(),
    );
    let fixture = fakes.fixture();

    let error = fixture.pipeline.run(upload_request("es")).await.unwrap_err();

    assert_eq!(error.stage(), PipelineStage::Synthesize);
    assert_eq!(error.kind(), "UpstreamError");
    assert_eq!(fixture.artifact_entries(), 0);
}

#[tokio::test]
async fn given_synthesizer_rejects_request_when_run_then_upstream_error() {
    let fakes = Fakes::new(
        FakeTranscriber::returning("hello"),
        FakeTranslator::returning("hola"),
        FakeSynthesizer::failing(),
    );
    let fixture = fakes.fixture();

    let error = fixture.pipeline.run(upload_request("es")).await.unwrap_err();

    assert_eq!(error.stage(), PipelineStage::Synthesize);
    assert_eq!(error.kind(), "UpstreamError");
}

#[tokio::test]
async fn given_source_hint_and_prompt_when_run_then_passed_to_backends() {
    let fakes = Fakes::happy();
    let fixture = fakes.fixture();
    let request = TranslationRequest::new(
        Bytes::from_static(b"audio"),
        "clip.ogg",
        LanguageCode::source_hint(Some("en")),
        LanguageCode::new("NO"),
        Some("  keep it formal ".to_string()),
    );

    fixture.pipeline.run(request).await.unwrap();

    assert_eq!(fakes.transcriber.last_source_language().as_deref(), Some("en"));
    assert_eq!(
        fakes.translator.last_call(),
        Some(("no".to_string(), Some("keep it formal".to_string())))
    );
}

#[tokio::test]
async fn given_auto_source_when_run_then_transcriber_detects_language() {
    let fakes = Fakes::happy();
    let fixture = fakes.fixture();
    let request = TranslationRequest::new(
        Bytes::from_static(b"audio"),
        "clip.ogg",
        LanguageCode::source_hint(Some("auto")),
        LanguageCode::new("no"),
        None,
    );

    fixture.pipeline.run(request).await.unwrap();

    assert_eq!(fakes.transcriber.calls(), 1);
    assert!(fakes.transcriber.last_source_language().is_none());
}

#[tokio::test]
async fn given_upload_named_like_intermediate_file_when_run_then_input_is_not_overwritten() {
    let fakes = Fakes::happy();
    let fixture = fakes.fixture();
    let request = TranslationRequest::new(
        Bytes::from_static(b"audio"),
        "audio.wav",
        None,
        LanguageCode::new("no"),
        None,
    );

    fixture.pipeline.run(request).await.unwrap();

    let args = fakes.runner.last_args();
    let input_index = args.iter().position(|a| a == "-i").unwrap() + 1;
    assert_ne!(&args[input_index], args.last().unwrap());
}

#[tokio::test]
async fn given_run_cancelled_mid_stage_when_dropped_then_workspace_is_removed() {
    let transcriber = Arc::new(FakeTranscriber::slow(Duration::from_secs(10)));
    let fixture = PipelineFixture::new(
        provider_set(
            transcriber.clone(),
            Arc::new(FakeTranslator::returning("unused")),
            Arc::new(FakeSynthesizer::returning(SYNTHESIZED_AUDIO)),
        ),
        Arc::new(CopyingProcessRunner::default()),
    );

    let outcome = tokio::time::timeout(
        Duration::from_millis(200),
        fixture.pipeline.run(upload_request("no")),
    )
    .await;

    assert!(outcome.is_err(), "run should still be waiting on the transcriber");
    assert_eq!(transcriber.calls(), 1);
    assert_eq!(fixture.workspace_entries(), 0);
    assert_eq!(fixture.artifact_entries(), 0);
}

#[tokio::test]
async fn given_concurrent_runs_when_finished_then_each_gets_its_own_artifact() {
    let fakes = Fakes::happy();
    let fixture = fakes.fixture();

    let runs = (0..4).map(|_| {
        let pipeline = fixture.pipeline.clone();
        tokio::spawn(async move { pipeline.run(upload_request("no")).await })
    });
    let results = futures::future::join_all(runs).await;

    let mut ids: Vec<String> = results
        .into_iter()
        .map(|r| r.unwrap().unwrap().audio_artifact_id.to_string())
        .collect();
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 4);
    assert_eq!(fixture.artifact_entries(), 4);
    assert_eq!(fixture.workspace_entries(), 0);
}
