use serde::Deserialize;

/// Both fields optional so the handler can answer missing fields with a 400
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
