//! Axum extractor for the network-observed address of the requester

use crate::api::error::ApiError;
use crate::state::AppState;

use std::future::Future;
use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};

/// Fallback lookup target when the caller supplies no explicit IP.
///
/// Precedence: `ip` header override > forwarded-for address when the direct
/// peer is a configured trusted proxy > direct connection address. None when
/// the transport reports no peer and no override is present.
pub struct ClientIp(pub Option<String>);

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let peer = parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip());

            Ok(ClientIp(resolve_client_ip(
                &parts.headers,
                peer,
                &state.trusted_proxies,
            )))
        }
    }
}

/// Pure precedence logic, kept separate from the extractor plumbing.
pub fn resolve_client_ip(
    headers: &HeaderMap,
    peer: Option<IpAddr>,
    trusted_proxies: &[IpAddr],
) -> Option<String> {
    // Caller-supplied override wins.
    if let Some(value) = headers.get("ip")
        && let Ok(ip) = value.to_str()
        && !ip.trim().is_empty()
    {
        return Some(ip.trim().to_string());
    }

    // Forwarded address counts only when the direct peer is a known proxy.
    if let Some(peer_addr) = peer
        && trusted_proxies.contains(&peer_addr)
        && let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(list) = forwarded.to_str()
        && let Some(first) = list.split(',').next()
        && !first.trim().is_empty()
    {
        return Some(first.trim().to_string());
    }

    peer.map(|addr| addr.to_string())
}
