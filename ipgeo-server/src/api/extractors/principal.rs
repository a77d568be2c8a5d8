//! Axum extractor turning a bearer token into a verified principal

use crate::api::error::ApiError;
use crate::state::AppState;

use ipgeo_auth::AuthError;
use ipgeo_core::Principal;
use ipgeo_db::UserRepository;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Verified identity for the current request.
///
/// Verification is stateless (signature + expiry), but the subject is
/// re-resolved against the user store on every call so a user deleted after
/// token issuance is rejected from then on. An absent header is a 401; a
/// present-but-unusable token is a 403.
pub struct AuthPrincipal(pub Principal);

impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(header::AUTHORIZATION) else {
                return Err(AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                }
                .into());
            };

            let value = header_value.to_str().map_err(|_| {
                ApiError::from(AuthError::InvalidToken {
                    message: "authorization header is not valid UTF-8".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            })?;

            let token = value.strip_prefix("Bearer ").ok_or_else(|| {
                ApiError::from(AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })
            })?;

            let claims = state.jwt_validator.validate(token)?;

            let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Forbidden {
                message: format!("token subject is not a valid user id: {}", claims.sub),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let user = UserRepository::find_by_id(&state.pool, user_id)
                .await?
                .ok_or_else(|| ApiError::Forbidden {
                    message: format!("token subject {} no longer resolves to a user", user_id),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            log::debug!("Authenticated request for user {}", user.id);

            Ok(AuthPrincipal(Principal::from(user)))
        }
    }
}
