mod artifact;
mod language_code;
mod pipeline_result;
mod pipeline_stage;
mod pipeline_state;
mod translation_request;
mod workspace;

pub use artifact::{Artifact, ArtifactId, AudioContentType};
pub use language_code::{AUTO_DETECT, LanguageCode};
pub use pipeline_result::PipelineResult;
pub use pipeline_stage::PipelineStage;
pub use pipeline_state::PipelineState;
pub use translation_request::TranslationRequest;
pub use workspace::{Workspace, WorkspaceId};
