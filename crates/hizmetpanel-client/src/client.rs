// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Main backend client.

use std::time::Duration;

use reqwest::Client;

use crate::auth::AuthClient;
use crate::error::{ApiError, Result};
use crate::services::ServicesClient;
use crate::types::LoginResponse;

/// Client for the Hizmet Panel backend REST API.
///
/// Holds one connection pool for the lifetime of the app. Authenticated
/// calls go through [`ApiClient::services`], which takes the bearer token
/// explicitly — there is no ambient session inside the client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://host:8000/api`).
    pub fn new(base_url: &str) -> Result<Self> {
        if base_url.trim().is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("HizmetPanel/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for a bearer token.
    ///
    /// Does not store anything; the caller owns the session state.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        AuthClient::new(&self.http, &self.base_url)
            .login(email, password)
            .await
    }

    /// Access the authenticated `/services` surface with the given token.
    pub fn services<'a>(&'a self, token: &'a str) -> ServicesClient<'a> {
        ServicesClient::new(&self.http, &self.base_url, token)
    }
}

/// Map transport-level failures: connection problems become
/// `ServerUnreachable`, everything else stays a request error.
pub(crate) fn map_send_err(e: reqwest::Error) -> ApiError {
    if e.is_connect() || e.is_timeout() {
        ApiError::ServerUnreachable(e.to_string())
    } else {
        ApiError::Request(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        assert!(ApiClient::new("https://example.com/api").is_ok());
        assert!(ApiClient::new("http://localhost:8000/api").is_ok());

        assert!(matches!(
            ApiClient::new(""),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("localhost:8000"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("ftp://example.com"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn url_normalization() {
        let client = ApiClient::new("http://localhost:8000/api///").expect("valid url");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }
}
