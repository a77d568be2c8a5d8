use ipgeo_auth::{JwtValidator, TokenIssuer};
use ipgeo_resolver::ResolverClient;

use std::net::IpAddr;
use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state, fixed at process start.
///
/// Everything here is immutable configuration or a handle that is cheap to
/// clone; the pool is the only shared mutable resource across requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub resolver: ResolverClient,
    /// Peers whose forwarded-for header is honored when resolving the
    /// client address.
    pub trusted_proxies: Arc<[IpAddr]>,
}
