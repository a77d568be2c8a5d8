use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute bag returned by the geolocation resolver.
///
/// The conventionally-present fields are typed but optional; every other
/// attribute the resolver sends is preserved verbatim in `extra` so that
/// stored history round-trips without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// "lat,lon" pair as reported by the resolver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GeoData {
    /// Parses `loc` into a (latitude, longitude) pair.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let (lat, lon) = self.loc.as_deref()?.split_once(',')?;
        Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
    }
}
