use crate::{DbError, Result as DbErrorResult};

use ipgeo_core::{ErrorLocation, GeoData, HistoryRecord};

use std::panic::Location;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

/// Append-only, owner-scoped store of lookup records.
pub struct HistoryRepository;

impl HistoryRepository {
    /// Persist a new record with a fresh id and the current timestamp.
    pub async fn append(
        pool: &SqlitePool,
        owner_id: Uuid,
        ip: &str,
        geo_data: &GeoData,
    ) -> DbErrorResult<HistoryRecord> {
        let record = HistoryRecord::new(owner_id, ip.to_string(), geo_data.clone());
        let geo_json = serde_json::to_string(&record.geo_data)?;

        sqlx::query(
            r#"
              INSERT INTO history_records (id, owner_id, ip, geo_data, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(record.id.to_string())
        .bind(record.owner_id.to_string())
        .bind(&record.ip)
        .bind(&geo_json)
        .bind(record.created_at.timestamp_millis())
        .execute(pool)
        .await?;

        Ok(record)
    }

    /// All records owned by `owner_id`, most recent first. An owner with no
    /// history gets an empty vec, never an error.
    pub async fn list_by_owner(
        pool: &SqlitePool,
        owner_id: Uuid,
    ) -> DbErrorResult<Vec<HistoryRecord>> {
        let rows = sqlx::query(
            r#"
              SELECT id, owner_id, ip, geo_data, created_at
              FROM history_records
              WHERE owner_id = ?
              ORDER BY created_at DESC, rowid DESC
              "#,
        )
        .bind(owner_id.to_string())
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(Self::decode).collect()
    }

    /// Delete exactly the records whose id is in `ids` AND whose owner is
    /// `owner_id`; ids belonging to someone else are silently ignored. One
    /// statement, so the deletion is atomic per call. Returns rows deleted.
    pub async fn delete_many(
        pool: &SqlitePool,
        owner_id: Uuid,
        ids: &[Uuid],
    ) -> DbErrorResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("DELETE FROM history_records WHERE owner_id = ");
        query.push_bind(owner_id.to_string());
        query.push(" AND id IN (");
        {
            let mut separated = query.separated(", ");
            for id in ids {
                separated.push_bind(id.to_string());
            }
        }
        query.push(")");

        let result = query.build().execute(pool).await?;

        Ok(result.rows_affected())
    }

    fn decode(row: SqliteRow) -> DbErrorResult<HistoryRecord> {
        let id: String = row.try_get("id")?;
        let owner_id: String = row.try_get("owner_id")?;
        let geo_json: String = row.try_get("geo_data")?;
        let created_at: i64 = row.try_get("created_at")?;

        Ok(HistoryRecord {
            id: Uuid::parse_str(&id).map_err(|e| Self::corrupt(format!("bad id {}: {}", id, e)))?,
            owner_id: Uuid::parse_str(&owner_id)
                .map_err(|e| Self::corrupt(format!("bad owner_id {}: {}", owner_id, e)))?,
            ip: row.try_get("ip")?,
            geo_data: serde_json::from_str(&geo_json)?,
            created_at: DateTime::from_timestamp_millis(created_at)
                .ok_or_else(|| Self::corrupt(format!("bad created_at {}", created_at)))?,
        })
    }

    #[track_caller]
    fn corrupt(message: String) -> DbError {
        DbError::CorruptRow {
            table: "history_records",
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
