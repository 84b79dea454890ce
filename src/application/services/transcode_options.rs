use std::path::Path;
use std::time::Duration;

/// How uploads are normalised before transcription.
#[derive(Debug, Clone)]
pub struct TranscodeOptions {
    pub command: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub timeout: Duration,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            command: "ffmpeg".to_string(),
            sample_rate: 16_000,
            channels: 1,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TranscodeOptions {
    /// Arguments turning `input` into an uncompressed WAV at `output`, overwriting it.
    pub fn arguments(&self, input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-y".to_string(),
            "-i".to_string(),
            input.display().to_string(),
            "-ac".to_string(),
            self.channels.to_string(),
            "-ar".to_string(),
            self.sample_rate.to_string(),
            "-vn".to_string(),
            output.display().to_string(),
        ]
    }
}
