use crate::{AuthError, Claims, Result as AuthErrorResult};

use ipgeo_core::ErrorLocation;

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Issues HS256-signed identity tokens with a fixed validity window.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            ttl,
        }
    }

    /// Produce a token encoding `{sub: user_id}`, valid from now for the
    /// configured window.
    #[track_caller]
    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
