use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_RESOLVER_ENDPOINT, DEFAULT_RESOLVER_TIMEOUT_SECS,
    MAX_RESOLVER_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Base URL of the external geolocation resolver.
    pub endpoint: String,
    /// Access token passed to the resolver. Optional; unauthenticated
    /// resolver tiers work without one.
    pub token: Option<String>,
    /// Upper bound on a single outbound lookup.
    pub timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_RESOLVER_ENDPOINT),
            token: None,
            timeout_secs: DEFAULT_RESOLVER_TIMEOUT_SECS,
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::resolver(format!(
                "resolver.endpoint must be an http(s) URL, got {}",
                self.endpoint
            )));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_RESOLVER_TIMEOUT_SECS {
            return Err(ConfigError::resolver(format!(
                "resolver.timeout_secs must be 1-{}, got {}",
                MAX_RESOLVER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
