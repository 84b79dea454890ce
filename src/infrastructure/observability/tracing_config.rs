use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub level: Option<String>,
}

impl TracingConfig {
    pub fn from_settings(logging: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment: environment.as_str().to_string(),
            json_format: logging.enable_json,
            level: Some(logging.level.clone()).filter(|l| !l.trim().is_empty()),
        }
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> String {
        match &self.level {
            Some(level) => format!("{level},tolk={level},tower_http={level}"),
            None => "info,tolk=debug,tower_http=debug".to_string(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            level: None,
        }
    }
}
