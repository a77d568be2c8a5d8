//! Lookup and history REST API handlers

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::client_ip::ClientIp;
use crate::api::extractors::principal::AuthPrincipal;
use crate::lookup;
use crate::state::AppState;
use crate::{DeleteHistoryRequest, DeleteResponse, GeoResponse, HistoryRecordDto, LookupRequest};

use ipgeo_db::HistoryRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use uuid::Uuid;

/// GET /ip/current
///
/// Looks up the network-observed address of the requester; the `ip` header
/// override takes precedence when present.
pub async fn lookup_current(
    State(state): State<AppState>,
    AuthPrincipal(principal): AuthPrincipal,
    ClientIp(client_ip): ClientIp,
) -> ApiResult<Json<GeoResponse>> {
    let target = client_ip.unwrap_or_default();
    let (geo_data, record) = lookup::lookup_and_record(&state, &principal, &target).await?;

    Ok(Json(GeoResponse {
        geo_data,
        ip: record.ip,
    }))
}

/// POST /ip/lookup
pub async fn lookup_ip(
    State(state): State<AppState>,
    AuthPrincipal(principal): AuthPrincipal,
    ClientIp(client_ip): ClientIp,
    Json(req): Json<LookupRequest>,
) -> ApiResult<Json<GeoResponse>> {
    // Explicit target wins over the network-observed fallback.
    let target = req
        .ip
        .filter(|ip| !ip.is_empty())
        .or(client_ip)
        .unwrap_or_default();
    let (geo_data, record) = lookup::lookup_and_record(&state, &principal, &target).await?;

    Ok(Json(GeoResponse {
        geo_data,
        ip: record.ip,
    }))
}

/// GET /ip/history
pub async fn list_history(
    State(state): State<AppState>,
    AuthPrincipal(principal): AuthPrincipal,
) -> ApiResult<Json<Vec<HistoryRecordDto>>> {
    let records = HistoryRepository::list_by_owner(&state.pool, principal.id).await?;

    Ok(Json(records.into_iter().map(HistoryRecordDto::from).collect()))
}

/// DELETE /ip/history
///
/// Deletes the caller's records among `ids`; ids owned by someone else are
/// silently ignored.
pub async fn delete_history(
    State(state): State<AppState>,
    AuthPrincipal(principal): AuthPrincipal,
    Json(req): Json<DeleteHistoryRequest>,
) -> ApiResult<Json<DeleteResponse>> {
    let ids = parse_ids(req)?;

    let deleted = HistoryRepository::delete_many(&state.pool, principal.id, &ids).await?;

    log::info!(
        "Deleted {} history record(s) for user {}",
        deleted,
        principal.id
    );

    Ok(Json(DeleteResponse {
        message: "History deleted successfully.".to_string(),
        deleted,
    }))
}

fn parse_ids(req: DeleteHistoryRequest) -> ApiResult<Vec<Uuid>> {
    let Some(serde_json::Value::Array(values)) = req.ids else {
        return Err(ApiError::Validation {
            message: "Invalid data format: ids must be an array.".to_string(),
            field: Some("ids".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    values
        .into_iter()
        .map(|value| {
            value
                .as_str()
                .and_then(|s| Uuid::parse_str(s).ok())
                .ok_or_else(|| ApiError::Validation {
                    message: "Invalid data format: ids must be record ids.".to_string(),
                    field: Some("ids".to_string()),
                    location: ErrorLocation::from(Location::caller()),
                })
        })
        .collect()
}
