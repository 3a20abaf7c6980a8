pub mod config;
pub mod container;
pub mod errors;
pub mod handlers;
pub mod params;
pub mod sessions;

pub use config::{AppConfig, ConfigError, LogFormat};
pub use container::AppContainer;

#[cfg(test)]
pub mod test_helpers;
