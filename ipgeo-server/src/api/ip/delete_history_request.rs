use serde::Deserialize;
use serde_json::Value;

/// `ids` stays untyped here so a non-array payload can be answered with a
/// 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct DeleteHistoryRequest {
    #[serde(default)]
    pub ids: Option<Value>,
}
