pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod lookup;
pub mod routes;
pub mod seed;
pub mod state;

pub use api::{
    auth::{auth::login, login_request::LoginRequest, login_response::LoginResponse},
    error::ApiError,
    error::Result as ApiResult,
    extractors::client_ip::ClientIp,
    extractors::principal::AuthPrincipal,
    ip::{
        delete_history_request::DeleteHistoryRequest,
        delete_response::DeleteResponse,
        geo_response::GeoResponse,
        history_record_dto::HistoryRecordDto,
        ip::{delete_history, list_history, lookup_current, lookup_ip},
        lookup_request::LookupRequest,
    },
};

use crate::routes::build_router;
use crate::state::AppState;

use ipgeo_auth::{JwtValidator, TokenIssuer};
use ipgeo_resolver::ResolverClient;

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    dotenvy::dotenv().ok();
    let config = ipgeo_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = ipgeo_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ipgeo-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and run migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = ipgeo_db::connection::connect(&database_path).await?;
    info!("Database connection established");

    // Development seed account (no-op unless configured)
    seed::ensure_seed_user(&pool, &config.auth).await?;

    // Process-wide signing secret, fixed at startup
    let Some(ref secret) = config.auth.jwt_secret else {
        unreachable!("validate() ensures auth.jwt_secret is set");
    };
    let token_issuer = Arc::new(TokenIssuer::new(
        secret.as_bytes(),
        Duration::from_secs(config.auth.token_ttl_secs),
    ));
    let jwt_validator = Arc::new(JwtValidator::with_hs256(secret.as_bytes()));

    // Outbound resolver client with enforced timeout
    let resolver = ResolverClient::new(
        config.resolver.endpoint.clone(),
        config.resolver.token.clone(),
        Duration::from_secs(config.resolver.timeout_secs),
    )?;

    // Build application state and router
    let state = AppState {
        pool,
        token_issuer,
        jwt_validator,
        resolver,
        trusted_proxies: config.server.trusted_proxy_addrs().into(),
    };
    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Serve with connect info (needed for client address fallback) and
    // graceful shutdown on SIGINT
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
    })
    .await?;

    info!("Shutdown complete");

    Ok(())
}
