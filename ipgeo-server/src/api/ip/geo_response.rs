use ipgeo_core::GeoData;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoResponse {
    pub geo_data: GeoData,
    pub ip: String,
}
