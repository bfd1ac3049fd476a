mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "DS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ds";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_NAME: &str = "admin";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_MIN_PASSWORD_LENGTH: usize = 1;
const MIN_MIN_PASSWORD_LENGTH: usize = 1;
const MAX_MIN_PASSWORD_LENGTH: usize = 128;

const DEFAULT_MAX_USERNAME_LENGTH: usize = 64;
const MIN_MAX_USERNAME_LENGTH: usize = 1;
const MAX_MAX_USERNAME_LENGTH: usize = 256;
