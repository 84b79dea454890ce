mod local_whisper_transcriber;
mod openai_whisper_transcriber;

pub use local_whisper_transcriber::LocalWhisperTranscriber;
pub use openai_whisper_transcriber::OpenAiWhisperTranscriber;
