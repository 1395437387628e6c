// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Login call. No refresh endpoint exists — a stale token only surfaces as a
// 401 on a later call.

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::client::map_send_err;
use crate::error::{ApiError, Result};
use crate::types::{LoginRequest, LoginResponse};

pub(crate) struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    pub(crate) async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(url = %url, email = %email, "attempting login");

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(map_send_err)?;

        let status = response.status();

        if status.is_success() {
            let login: LoginResponse = response.json().await.map_err(|e| {
                ApiError::ParseError(format!("failed to parse login response: {e}"))
            })?;
            info!("login successful");
            Ok(login)
        } else if status.as_u16() == 401 {
            warn!(status = %status, "login rejected");
            Err(ApiError::AuthFailed("invalid credentials".to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
