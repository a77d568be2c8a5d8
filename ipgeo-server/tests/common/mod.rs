#![allow(dead_code)]

//! Test infrastructure for ipgeo-server API tests

use ipgeo_auth::{JwtValidator, TokenIssuer, password};
use ipgeo_core::User;
use ipgeo_db::UserRepository;
use ipgeo_resolver::ResolverClient;
use ipgeo_server::AppState;

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes!";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/ipgeo-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, pointed at the given resolver endpoint
pub async fn create_test_state(resolver_endpoint: &str) -> AppState {
    create_test_state_with_proxies(resolver_endpoint, Vec::new()).await
}

/// Same, with a configured trusted-proxy list
pub async fn create_test_state_with_proxies(
    resolver_endpoint: &str,
    trusted_proxies: Vec<IpAddr>,
) -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        token_issuer: Arc::new(TokenIssuer::new(TEST_SECRET, Duration::from_secs(3600))),
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        resolver: ResolverClient::new(
            resolver_endpoint,
            Some("test-token".to_string()),
            Duration::from_secs(2),
        )
        .expect("Failed to build resolver client"),
        trusted_proxies: trusted_proxies.into(),
    }
}

/// Create a user with an Argon2-hashed password
pub async fn create_test_user(pool: &SqlitePool, email: &str, cleartext: &str) -> User {
    let user = User::new(email.to_string(), password::hash(cleartext).unwrap());
    UserRepository::create(pool, &user)
        .await
        .expect("Failed to create test user");
    user
}

/// Build a JSON request, optionally with a bearer token
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };

    builder.body(body).unwrap()
}

/// Collect a response body into JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into raw bytes
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Conventional resolver payload for an IP
pub fn geo_payload(ip: &str) -> serde_json::Value {
    json!({
        "ip": ip,
        "city": "Mountain View",
        "region": "California",
        "country": "US",
        "loc": "37.4056,-122.0775",
        "org": "AS15169 Google LLC",
    })
}

/// Mount a successful geo response for `ip` on the mock resolver
pub async fn mount_geo(server: &MockServer, ip: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{ip}/geo")))
        .respond_with(ResponseTemplate::new(200).set_body_json(geo_payload(ip)))
        .mount(server)
        .await;
}
