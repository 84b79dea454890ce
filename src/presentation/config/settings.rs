use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::TranscodeOptions;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub storage: StorageSettings,
    pub transcode: TranscodeSettings,
    pub providers: ProvidersSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub workspace_root: String,
    pub artifact_root: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscodeSettings {
    pub command: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub timeout_secs: u64,
}

impl TranscodeSettings {
    pub fn options(&self) -> TranscodeOptions {
        TranscodeOptions {
            command: self.command.clone(),
            sample_rate: self.sample_rate,
            channels: self.channels,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderFamily {
    Local,
    Cloud,
}

impl ProviderFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderFamily::Local => "local",
            ProviderFamily::Cloud => "cloud",
        }
    }
}

impl fmt::Display for ProviderFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersSettings {
    pub family: ProviderFamily,
    pub request_timeout_secs: u64,
    pub local: LocalProviderSettings,
    pub cloud: CloudProviderSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalProviderSettings {
    pub whisper_url: String,
    pub llama_url: String,
    pub llama_model: String,
    pub piper_url: String,
    #[serde(default)]
    pub default_voice: Option<String>,
    #[serde(default)]
    pub voices: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudProviderSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub transcription_model: String,
    pub chat_model: String,
    pub speech_model: String,
    #[serde(default)]
    pub default_voice: Option<String>,
    #[serde(default)]
    pub voices: HashMap<String, String>,
}

impl Settings {
    /// Loads defaults, then `appsettings.{environment}` if present, then `APP_*` variables
    /// (`APP_PROVIDERS__FAMILY=cloud`). `OPENAI_API_KEY` fills the cloud key when set.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;
        if let Some(key) = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()) {
            builder = builder.set_default("providers.cloud.api_key", key)?;
        }

        builder
            .add_source(File::with_name(&environment.config_file_name()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Settings from compiled defaults only.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let workspace_root = std::env::temp_dir().join("tolk");

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_upload_bytes", 50 * 1024 * 1024)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default(
                "storage.workspace_root",
                workspace_root.display().to_string(),
            )?
            .set_default("storage.artifact_root", "data/audio")?
            .set_default("transcode.command", "ffmpeg")?
            .set_default("transcode.sample_rate", 16_000)?
            .set_default("transcode.channels", 1)?
            .set_default("transcode.timeout_secs", 30)?
            .set_default("providers.family", "local")?
            .set_default("providers.request_timeout_secs", 120)?
            .set_default("providers.local.whisper_url", "http://localhost:9000")?
            .set_default("providers.local.llama_url", "http://localhost:18080/v1")?
            .set_default("providers.local.llama_model", "local")?
            .set_default("providers.local.piper_url", "http://localhost:5002")?
            .set_default("providers.cloud.base_url", "https://api.openai.com/v1")?
            .set_default("providers.cloud.transcription_model", "whisper-1")?
            .set_default("providers.cloud.chat_model", "gpt-4o-mini")?
            .set_default("providers.cloud.speech_model", "tts-1")
    }
}
