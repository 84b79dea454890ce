use std::fmt;

use super::PipelineStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    Received,
    Transcoded,
    Transcribed,
    Translated,
    Synthesized,
    Persisted,
    Failed(PipelineStage),
}

impl PipelineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Received => "RECEIVED",
            PipelineState::Transcoded => "TRANSCODED",
            PipelineState::Transcribed => "TRANSCRIBED",
            PipelineState::Translated => "TRANSLATED",
            PipelineState::Synthesized => "SYNTHESIZED",
            PipelineState::Persisted => "PERSISTED",
            PipelineState::Failed(_) => "FAILED",
        }
    }

    /// Stage that runs to leave this state, `None` once terminal.
    pub fn next_stage(&self) -> Option<PipelineStage> {
        match self {
            PipelineState::Received => Some(PipelineStage::Transcode),
            PipelineState::Transcoded => Some(PipelineStage::Transcribe),
            PipelineState::Transcribed => Some(PipelineStage::Translate),
            PipelineState::Translated => Some(PipelineStage::Synthesize),
            PipelineState::Synthesized => Some(PipelineStage::Persist),
            PipelineState::Persisted | PipelineState::Failed(_) => None,
        }
    }

    /// State reached when `next_stage` succeeds.
    pub fn advance(&self) -> Option<PipelineState> {
        match self {
            PipelineState::Received => Some(PipelineState::Transcoded),
            PipelineState::Transcoded => Some(PipelineState::Transcribed),
            PipelineState::Transcribed => Some(PipelineState::Translated),
            PipelineState::Translated => Some(PipelineState::Synthesized),
            PipelineState::Synthesized => Some(PipelineState::Persisted),
            PipelineState::Persisted | PipelineState::Failed(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Persisted | PipelineState::Failed(_))
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Failed(stage) => write!(f, "FAILED({})", stage),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
