pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod lookup;
pub mod routes;
pub mod seed;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{auth::login, login_request::LoginRequest, login_response::LoginResponse},
    error::ApiError,
    error::Result as ApiResult,
    extractors::client_ip::ClientIp,
    extractors::principal::AuthPrincipal,
    ip::{
        delete_history_request::DeleteHistoryRequest,
        delete_response::DeleteResponse,
        geo_response::GeoResponse,
        history_record_dto::HistoryRecordDto,
        ip::{delete_history, list_history, lookup_current, lookup_ip},
        lookup_request::LookupRequest,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
