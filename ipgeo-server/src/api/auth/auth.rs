//! Login handler: credentials in, signed identity token out

use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;
use crate::{LoginRequest, LoginResponse};

use ipgeo_auth::password;
use ipgeo_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// POST /auth/login
///
/// An unknown email and a wrong password produce byte-identical responses;
/// the missing-account path still burns a hash verification so the two cost
/// the same.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (
        req.email.filter(|e| !e.is_empty()),
        req.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::Validation {
            message: "Email and Password are required.".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let user = match UserRepository::find_by_email(&state.pool, &email).await? {
        Some(user) => {
            password::verify(&password, &user.password_hash)?;
            user
        }
        None => return Err(password::verify_missing_account(&password).into()),
    };

    let token = state.token_issuer.issue(user.id)?;

    log::info!("Issued token for user {}", user.id);

    Ok(Json(LoginResponse { token }))
}
