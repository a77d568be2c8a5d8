use ipgeo_core::{GeoData, HistoryRecord};

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecordDto {
    pub id: String,
    pub ip: String,
    pub geo_data: GeoData,
    pub owner_id: String,
    /// Epoch milliseconds
    pub created_at: i64,
}

impl From<HistoryRecord> for HistoryRecordDto {
    fn from(r: HistoryRecord) -> Self {
        Self {
            id: r.id.to_string(),
            ip: r.ip,
            geo_data: r.geo_data,
            owner_id: r.owner_id.to_string(),
            created_at: r.created_at.timestamp_millis(),
        }
    }
}
