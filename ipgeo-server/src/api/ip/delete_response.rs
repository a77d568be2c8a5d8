use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted: u64,
}
