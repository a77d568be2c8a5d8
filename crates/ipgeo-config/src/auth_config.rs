use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, MIN_JWT_SECRET_CHARS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Process-wide HS256 signing secret. Required; no default.
    pub jwt_secret: Option<String>,
    /// Token validity window from issuance.
    pub token_ttl_secs: u64,
    /// Development-only seed account, created at startup when both are set.
    pub seed_email: Option<String>,
    pub seed_password: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            seed_email: None,
            seed_password: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set IPGEO_AUTH_JWT_SECRET or config.toml)",
                ));
            }
            Some(ref secret) if secret.len() < MIN_JWT_SECRET_CHARS => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {MIN_JWT_SECRET_CHARS} characters"
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be > 0"));
        }

        if self.seed_email.is_some() != self.seed_password.is_some() {
            return Err(ConfigError::auth(
                "auth.seed_email and auth.seed_password must be set together",
            ));
        }

        Ok(())
    }
}
