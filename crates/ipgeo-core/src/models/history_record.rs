use crate::GeoData;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded lookup. Immutable once created; only ever visible to the
/// user referenced by `owner_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub ip: String,
    pub geo_data: GeoData,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn new(owner_id: Uuid, ip: String, geo_data: GeoData) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            ip,
            geo_data,
            created_at: Utc::now(),
        }
    }
}
