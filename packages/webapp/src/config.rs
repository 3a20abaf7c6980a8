use std::env;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug)]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.key, self.message)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    /// Include fault details in 500 responses
    pub display_error_details: bool,
    pub log_format: LogFormat,
    /// Idle time after which a session is discarded
    pub session_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            app_name: "formcheck".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            display_error_details: false,
            log_format: LogFormat::Pretty,
            session_ttl_secs: 7200,
        }
    }
}

impl AppConfig {
    /// Reads the config from the process environment, loading `.env` first
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("APP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError {
                key: "APP_PORT",
                message: format!("`{raw}` is not a port number ({e})"),
            })?,
            None => defaults.port,
        };

        let display_error_details = match get("DISPLAY_ERROR_DETAILS") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError {
                key: "DISPLAY_ERROR_DETAILS",
                message: format!("`{raw}` is not a boolean"),
            })?,
            None => defaults.display_error_details,
        };

        let session_ttl_secs = match get("SESSION_TTL_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError {
                key: "SESSION_TTL_SECS",
                message: format!("`{raw}` is not a number of seconds ({e})"),
            })?,
            None => defaults.session_ttl_secs,
        };

        let log_format = match get("LOG_FORMAT").map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "json" => LogFormat::Json,
            Some(v) if v == "pretty" => LogFormat::Pretty,
            Some(v) => {
                return Err(ConfigError {
                    key: "LOG_FORMAT",
                    message: format!("`{v}` is not one of: pretty, json"),
                })
            }
            None => defaults.log_format,
        };

        Ok(AppConfig {
            app_name: get("APP_NAME").unwrap_or(defaults.app_name),
            host: get("APP_HOST").unwrap_or(defaults.host),
            port,
            display_error_details,
            log_format,
            session_ttl_secs,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.app_name, "formcheck");
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 8080));
        assert!(!config.display_error_details);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.session_ttl(), Duration::from_secs(7200));
    }

    #[test]
    fn test_reads_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("APP_NAME", "Signup"),
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "9000"),
            ("DISPLAY_ERROR_DETAILS", "true"),
            ("LOG_FORMAT", "JSON"),
            ("SESSION_TTL_SECS", "900"),
        ]))
        .unwrap();

        assert_eq!(config.app_name, "Signup");
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 9000));
        assert!(config.display_error_details);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.session_ttl_secs, 900);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("APP_PORT", " "), ("APP_NAME", "")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.app_name, "formcheck");
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = AppConfig::from_lookup(lookup(&[("APP_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.key, "APP_PORT");

        let err = AppConfig::from_lookup(lookup(&[("DISPLAY_ERROR_DETAILS", "maybe")])).unwrap_err();
        assert_eq!(err.key, "DISPLAY_ERROR_DETAILS");

        let err = AppConfig::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert_eq!(err.key, "LOG_FORMAT");

        let err = AppConfig::from_lookup(lookup(&[("SESSION_TTL_SECS", "-5")])).unwrap_err();
        assert_eq!(err.key, "SESSION_TTL_SECS");
    }
}
