#![allow(dead_code)]

use ipgeo_core::{GeoData, User};

use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user row and returns it
pub async fn create_test_user(pool: &SqlitePool) -> User {
    let user = User {
        id: Uuid::new_v4(),
        email: format!("test-{}@example.com", Uuid::new_v4()),
        password_hash: "$argon2id$test-hash".to_string(),
        created_at: Utc::now(),
    };

    sqlx::query("INSERT INTO users (id, email, password_hash, created_at) VALUES (?, ?, ?, ?)")
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at.timestamp_millis())
        .execute(pool)
        .await
        .expect("Failed to create test user");

    user
}

/// Sample resolver payload with typed and extension fields
pub fn sample_geo_data() -> GeoData {
    let mut extra = serde_json::Map::new();
    extra.insert("org".to_string(), json!("AS15169 Google LLC"));

    GeoData {
        city: Some("Mountain View".to_string()),
        region: Some("California".to_string()),
        country: Some("US".to_string()),
        loc: Some("37.4056,-122.0775".to_string()),
        extra,
    }
}
