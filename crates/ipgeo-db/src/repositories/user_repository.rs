use crate::{DbError, Result as DbErrorResult};

use ipgeo_core::{ErrorLocation, User};

use std::panic::Location;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub async fn create(pool: &SqlitePool, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (id, email, password_hash, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at.timestamp_millis())
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Insert unless the email is already taken. Returns whether a row was
    /// written. Used for startup seeding.
    pub async fn insert_if_absent(pool: &SqlitePool, user: &User) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              INSERT OR IGNORE INTO users (id, email, password_hash, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at.timestamp_millis())
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Exact-match lookup; emails are case-sensitive as stored.
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, email, password_hash, created_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        row.map(Self::decode).transpose()
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, email, password_hash, created_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

        row.map(Self::decode).transpose()
    }

    fn decode(row: SqliteRow) -> DbErrorResult<User> {
        let id: String = row.try_get("id")?;
        let created_at: i64 = row.try_get("created_at")?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DbError::CorruptRow {
                table: "users",
                message: format!("bad id {}: {}", id, e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            created_at: DateTime::from_timestamp_millis(created_at).ok_or_else(|| {
                DbError::CorruptRow {
                    table: "users",
                    message: format!("bad created_at {}", created_at),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}
