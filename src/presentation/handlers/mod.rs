mod audio;
pub mod error;
mod health;
mod translate;

pub use audio::audio_handler;
pub use error::ErrorResponse;
pub use health::health_handler;
pub use translate::{AUDIO_ROUTE_PREFIX, TranslateResponse, translate_handler};
