mod artifact_store;
mod process_runner;
mod provider_error;
mod provider_set;
mod synthesizer;
mod transcriber;
mod translator;
mod workspace_manager;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use process_runner::{ProcessOutcome, ProcessRunner};
pub use provider_error::ProviderError;
pub use provider_set::ProviderSet;
pub use synthesizer::{AudioStream, Synthesizer};
pub use transcriber::Transcriber;
pub use translator::Translator;
pub use workspace_manager::{WorkspaceError, WorkspaceManager};
