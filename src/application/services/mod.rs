mod transcode_options;
mod translation_pipeline;
mod workspace_scope;

pub use transcode_options::TranscodeOptions;
pub use translation_pipeline::{PipelineError, TranslationPipeline};
pub use workspace_scope::WorkspaceScope;
