//! Lookup orchestration: validate the target, resolve it, record it.
//!
//! The contract is record-or-fail: a caller never receives geo data that is
//! not also in its history. A resolver failure writes nothing; a storage
//! failure fails the whole request even though the external lookup
//! succeeded.

use crate::api::error::Result as ApiResult;
use crate::state::AppState;

use ipgeo_core::{GeoData, HistoryRecord, Principal, ipv4};
use ipgeo_db::HistoryRepository;

pub async fn lookup_and_record(
    state: &AppState,
    principal: &Principal,
    target_ip: &str,
) -> ApiResult<(GeoData, HistoryRecord)> {
    // Fails before the resolver or storage is touched.
    let ip = ipv4::require(target_ip.trim())?;

    let geo_data = state.resolver.resolve(ip).await?;

    let record = HistoryRepository::append(&state.pool, principal.id, ip, &geo_data).await?;

    log::info!("Recorded lookup of {} for user {}", ip, principal.id);

    Ok((geo_data, record))
}
