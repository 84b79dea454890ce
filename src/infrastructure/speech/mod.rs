mod openai_speech_synthesizer;
mod piper_synthesizer;
mod voice_table;

pub use openai_speech_synthesizer::OpenAiSpeechSynthesizer;
pub use piper_synthesizer::PiperSynthesizer;
pub use voice_table::{OPENAI_DEFAULT_VOICE, PIPER_DEFAULT_VOICE, VoiceTable};
