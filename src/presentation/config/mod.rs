mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CloudProviderSettings, LocalProviderSettings, LoggingSettings, ProviderFamily,
    ProvidersSettings, ServerSettings, Settings, StorageSettings, TranscodeSettings,
};
