use crate::ApiError;

use ipgeo_auth::AuthError;
use ipgeo_core::ipv4;
use ipgeo_resolver::ResolverError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http_body_util::BodyExt;

async fn response_parts(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn given_invalid_ip_then_400_validation_error() {
    let error: ApiError = ipv4::require("not-an-ip").unwrap_err().into();

    let (status, body) = response_parts(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(body["error"]["code"].as_str(), some(eq("VALIDATION_ERROR")));
    assert_that!(body["error"]["field"].as_str(), some(eq("ip")));
}

#[tokio::test]
async fn given_missing_header_then_401_missing_token() {
    let error: ApiError = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, body) = response_parts(error).await;

    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(body["error"]["code"].as_str(), some(eq("MISSING_TOKEN")));
}

#[tokio::test]
async fn given_expired_token_then_403_with_generic_message() {
    let error: ApiError = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, body) = response_parts(error).await;

    assert_that!(status, eq(StatusCode::FORBIDDEN));
    assert_that!(body["error"]["code"].as_str(), some(eq("INVALID_TOKEN")));
    // The expiry detail stays in the logs, not in the body.
    assert_that!(body["error"]["message"].as_str(), some(eq("Invalid token.")));
}

#[tokio::test]
async fn given_invalid_credentials_then_400_with_fixed_message() {
    let error: ApiError = AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, body) = response_parts(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(
        body["error"]["code"].as_str(),
        some(eq("INVALID_CREDENTIALS"))
    );
    assert_that!(
        body["error"]["message"].as_str(),
        some(eq("Invalid credentials."))
    );
}

#[tokio::test]
async fn given_resolver_failure_then_500_with_generic_message() {
    for error in [
        ResolverError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        },
        ResolverError::Unreachable {
            message: "connect refused".to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
    ] {
        let (status, body) = response_parts(error.into()).await;

        // Specific kind is internal only; the client sees one message.
        assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
        assert_that!(body["error"]["code"].as_str(), some(eq("INTERNAL_ERROR")));
        assert_that!(
            body["error"]["message"].as_str(),
            some(eq("Error fetching geolocation data."))
        );
    }
}
