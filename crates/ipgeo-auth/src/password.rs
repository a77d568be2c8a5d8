//! Argon2id password hashing and constant-effort verification.

use crate::{AuthError, Result as AuthErrorResult};

use ipgeo_core::ErrorLocation;

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Well-formed Argon2id hash that matches no password. Verified against when
/// no stored hash exists, so the missing-account path costs the same as a
/// mismatch.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Hash a cleartext password into a PHC-format string.
#[track_caller]
pub fn hash(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Verify a cleartext password against a stored PHC hash.
///
/// An unparseable stored hash and a mismatched password yield the same
/// `InvalidCredentials` failure.
#[track_caller]
pub fn verify(password: &str, stored_hash: &str) -> AuthErrorResult<()> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    })?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Failure path for an account that does not exist: burns a verification
/// against `DUMMY_HASH` before returning the shared failure kind.
#[track_caller]
pub fn verify_missing_account(password: &str) -> AuthError {
    let _ = verify(password, DUMMY_HASH);
    AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
}
