use std::sync::Arc;

use super::{Synthesizer, Transcriber, Translator};

/// The three backends of one provider family, chosen together at startup.
#[derive(Clone)]
pub struct ProviderSet {
    pub family: &'static str,
    pub transcriber: Arc<dyn Transcriber>,
    pub translator: Arc<dyn Translator>,
    pub synthesizer: Arc<dyn Synthesizer>,
}
