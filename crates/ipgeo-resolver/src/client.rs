use crate::{ResolverError, Result};

use ipgeo_core::{ErrorLocation, GeoData};

use std::panic::Location;
use std::time::Duration;

use reqwest::StatusCode;

/// Client for the external geolocation resolver.
///
/// One outbound GET per lookup, bounded by the configured timeout. No
/// retries here; retry policy, if any, belongs to the caller.
#[derive(Clone)]
pub struct ResolverClient {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl ResolverClient {
    #[track_caller]
    pub fn new(
        endpoint: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResolverError::Build {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mut endpoint = endpoint.into();
        while endpoint.ends_with('/') {
            endpoint.pop();
        }

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    /// Resolve geolocation metadata for a validated IPv4 address.
    ///
    /// Timeouts and transport failures surface as `Unreachable`; a 401/403
    /// from the resolver as `Unauthorized`; any other non-2xx as `NoData`;
    /// an unparseable 2xx body as `Malformed`.
    pub async fn resolve(&self, ip: &str) -> Result<GeoData> {
        let url = format!("{}/{}/geo", self.endpoint, ip);

        let mut request = self.client.get(&url);
        if let Some(ref token) = self.token {
            request = request.query(&[("token", token.as_str())]);
        }

        // The access token rides in the query string; strip the URL from
        // transport errors so it never reaches the logs.
        let response = request
            .send()
            .await
            .map_err(|e| ResolverError::Unreachable {
                message: e.without_url().to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ResolverError::Unauthorized {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if !status.is_success() {
            return Err(ResolverError::NoData {
                ip: ip.to_string(),
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        response
            .json::<GeoData>()
            .await
            .map_err(|e| ResolverError::Malformed {
                message: e.without_url().to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
