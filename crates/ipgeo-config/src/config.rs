use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ResolverConfig,
    ServerConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub resolver: ResolverConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for IPGEO_CONFIG_DIR env var, else use ./.ipgeo/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply IPGEO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: IPGEO_CONFIG_DIR env var > ./.ipgeo/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("IPGEO_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".ipgeo"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.resolver.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        if !self.server.trusted_proxies.is_empty() {
            info!("  trusted proxies: {}", self.server.trusted_proxies.join(", "));
        }
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256, token ttl {}s, seed account {}",
            self.auth.token_ttl_secs,
            if self.auth.seed_email.is_some() {
                "enabled"
            } else {
                "disabled"
            }
        );
        info!(
            "  resolver: {} (timeout {}s, token {})",
            self.resolver.endpoint,
            self.resolver.timeout_secs,
            if self.resolver.token.is_some() {
                "set"
            } else {
                "unset"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("IPGEO_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("IPGEO_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("IPGEO_TRUSTED_PROXIES", &mut self.server.trusted_proxies);

        // Database
        Self::apply_env_string("IPGEO_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("IPGEO_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("IPGEO_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_option_string("IPGEO_AUTH_SEED_EMAIL", &mut self.auth.seed_email);
        Self::apply_env_option_string("IPGEO_AUTH_SEED_PASSWORD", &mut self.auth.seed_password);

        // Resolver
        Self::apply_env_string("IPGEO_RESOLVER_ENDPOINT", &mut self.resolver.endpoint);
        Self::apply_env_option_string("IPGEO_RESOLVER_TOKEN", &mut self.resolver.token);
        Self::apply_env_parse("IPGEO_RESOLVER_TIMEOUT_SECS", &mut self.resolver.timeout_secs);

        // Logging
        Self::apply_env_parse("IPGEO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("IPGEO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("IPGEO_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
