use error_location::ErrorLocation;
use thiserror::Error;

/// Failure taxonomy for one outbound resolver call. The distinction matters
/// to internal logging only; clients of the HTTP surface never see these.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Resolver unreachable: {message} {location}")]
    Unreachable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Resolver rejected the access token {location}")]
    Unauthorized { location: ErrorLocation },

    #[error("Resolver returned no usable data for {ip} (status {status}) {location}")]
    NoData {
        ip: String,
        status: u16,
        location: ErrorLocation,
    },

    #[error("Resolver response could not be parsed: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Resolver client construction failed: {message} {location}")]
    Build {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, ResolverError>;
