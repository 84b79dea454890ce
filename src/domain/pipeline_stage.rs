use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Validation,
    Transcode,
    Transcribe,
    Translate,
    Synthesize,
    Persist,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Validation => "validation",
            PipelineStage::Transcode => "transcode",
            PipelineStage::Transcribe => "transcribe",
            PipelineStage::Translate => "translate",
            PipelineStage::Synthesize => "synthesize",
            PipelineStage::Persist => "persist",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
