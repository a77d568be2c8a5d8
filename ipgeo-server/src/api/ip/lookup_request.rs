use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    /// Explicit lookup target; falls back to the network-observed address
    /// of the requester when absent.
    #[serde(default)]
    pub ip: Option<String>,
}
