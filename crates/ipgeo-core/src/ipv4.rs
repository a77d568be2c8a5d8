//! Syntactic IPv4 validation.
//!
//! A valid address is exactly four dot-separated decimal groups, each 1-3
//! ASCII digits with a numeric value in 0-255. Anything else (IPv6 literals,
//! hostnames, whitespace, signs, empty groups) is rejected.

use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;

/// Returns true when `s` is a well-formed IPv4 dotted quad.
///
/// Pure syntactic check; leading zeros are accepted as long as the group
/// stays within 3 digits and 0-255 (`"8.08.008.8"` is valid, `"8.0008.0.8"`
/// is not).
pub fn is_valid_ipv4(s: &str) -> bool {
    let mut groups = 0u8;

    for group in s.split('.') {
        groups += 1;
        if groups > 4 {
            return false;
        }
        if group.is_empty() || group.len() > 3 {
            return false;
        }
        if !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        // 3 digits max, cannot overflow u16
        let value: u16 = match group.parse() {
            Ok(v) => v,
            Err(_) => return false,
        };
        if value > 255 {
            return false;
        }
    }

    groups == 4
}

/// Validates `s` as an IPv4 dotted quad, returning it unchanged on success.
#[track_caller]
pub fn require(s: &str) -> Result<&str> {
    if is_valid_ipv4(s) {
        Ok(s)
    } else {
        Err(CoreError::InvalidIpv4 {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
