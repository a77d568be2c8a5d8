pub mod error_location;

// -------------------------------------------------------------------------- //

use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid IPv4 address: {value} {location}")]
    InvalidIpv4 {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
