//! REST API error types
//!
//! Every component-local failure is translated here into exactly one
//! transport-facing kind before it reaches the client. Resolver and storage
//! details stay in the logs; the response bodies carry generic messages.

use ipgeo_auth::AuthError;
use ipgeo_core::CoreError;
use ipgeo_db::DbError;
use ipgeo_resolver::ResolverError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR", "INVALID_TOKEN")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad input shape or IP (400); never contacts dependencies
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Unknown email or wrong password (400); one kind, one message
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// No bearer token on a protected route (401)
    #[error("Missing access token {location}")]
    MissingToken { location: ErrorLocation },

    /// Token present but malformed, expired, badly signed, or bound to a
    /// subject that no longer exists (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging; bodies stay generic.
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::InvalidCredentials { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".into(),
                    message: "Invalid credentials.".into(),
                    field: None,
                },
            ),
            ApiError::MissingToken { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "MISSING_TOKEN".into(),
                    message: "Access token required.".into(),
                    field: None,
                },
            ),
            ApiError::Forbidden { .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "INVALID_TOKEN".into(),
                    message: "Invalid token.".into(),
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert IP validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidIpv4 { .. } => ApiError::Validation {
                message: "Invalid IP address.".to_string(),
                field: Some("ip".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert authentication errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingHeader { .. } => ApiError::MissingToken {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::InvalidCredentials { .. } => ApiError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::PasswordHash { .. } | AuthError::JwtEncode { .. } => {
                log::error!("Auth subsystem failure: {}", e);
                ApiError::Internal {
                    message: "Authentication failed.".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            // Token present but unusable: expired, bad signature, bad
            // scheme, bad claims.
            _ => ApiError::Forbidden {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Storage operation failed.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert resolver errors to API errors
impl From<ResolverError> for ApiError {
    #[track_caller]
    fn from(e: ResolverError) -> Self {
        // The failure kind (unreachable/unauthorized/no data/malformed) is
        // for internal logging only; the client sees one generic message.
        log::error!("Geo lookup failed: {}", e);
        ApiError::Internal {
            message: "Error fetching geolocation data.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
