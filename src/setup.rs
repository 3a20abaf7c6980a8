// src/setup.rs

use tracing_subscriber::EnvFilter;
use webapp::{AppConfig, ConfigError, LogFormat};

pub(super) fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

pub(super) fn set_up_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_target(false).init(),
    }
}
