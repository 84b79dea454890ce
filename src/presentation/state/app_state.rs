use std::sync::Arc;

use crate::application::ports::ArtifactStore;
use crate::application::services::TranslationPipeline;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TranslationPipeline>,
    pub artifact_store: Arc<dyn ArtifactStore>,
    pub settings: Settings,
}
