mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod resolver_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use resolver_config::ResolverConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_RESOLVER_ENDPOINT: &str = "https://ipinfo.io";
const DEFAULT_RESOLVER_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const MIN_JWT_SECRET_CHARS: usize = 32;
const MIN_PORT: u16 = 1024;
const MAX_RESOLVER_TIMEOUT_SECS: u64 = 120;

#[cfg(test)]
mod tests;
