// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Authenticated `/services` surface: CRUD, dashboard statistics, exports.

use hizmetpanel_core::types::{DashboardStats, ServiceDraft, ServiceRecord};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::map_send_err;
use crate::error::{ApiError, Result};

/// Export document format offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    /// Trailing path segment of the export endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Excel => "excel",
            Self::Pdf => "pdf",
        }
    }

    /// Filename the backend serves the document under.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Excel => "hizmetler.xlsx",
            Self::Pdf => "hizmetler.pdf",
        }
    }
}

/// Borrowing handle over the service endpoints; the token is supplied by
/// the caller per use, never stored here.
pub struct ServicesClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    token: &'a str,
}

impl<'a> ServicesClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, token: &'a str) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// `GET /services` — every non-deleted record.
    pub async fn list(&self) -> Result<Vec<ServiceRecord>> {
        let url = format!("{}/services", self.base_url);
        debug!(url = %url, "fetching service list");
        let response = self.send(self.http.get(&url)).await?;
        read_json(response, "service list").await
    }

    /// `GET /services/{id}`.
    pub async fn get(&self, id: &str) -> Result<ServiceRecord> {
        let url = format!("{}/services/{id}", self.base_url);
        let response = self.send(self.http.get(&url)).await?;
        read_json(response, "service").await
    }

    /// `GET /services/stats/dashboard` — aggregate counters.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let url = format!("{}/services/stats/dashboard", self.base_url);
        debug!(url = %url, "fetching dashboard stats");
        let response = self.send(self.http.get(&url)).await?;
        read_json(response, "dashboard stats").await
    }

    /// `POST /services` — create a record; the backend assigns the id.
    pub async fn create(&self, draft: &ServiceDraft) -> Result<ServiceRecord> {
        let url = format!("{}/services", self.base_url);
        debug!(url = %url, name = %draft.name, "creating service");
        let response = self.send(self.http.post(&url).json(draft)).await?;
        read_json(response, "created service").await
    }

    /// `PUT /services/{id}` — full-record update, last write wins.
    pub async fn update(&self, id: &str, draft: &ServiceDraft) -> Result<ServiceRecord> {
        let url = format!("{}/services/{id}", self.base_url);
        debug!(url = %url, name = %draft.name, "updating service");
        let response = self.send(self.http.put(&url).json(draft)).await?;
        read_json(response, "updated service").await
    }

    /// `DELETE /services/{id}` — soft delete on the backend.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = format!("{}/services/{id}", self.base_url);
        debug!(url = %url, "deleting service");
        let response = self.send(self.http.delete(&url)).await?;
        check_status(response).await.map(|_| ())
    }

    /// `GET /services/export/{format}` — serialized document bytes for the
    /// user to save locally.
    pub async fn export(&self, format: ExportFormat) -> Result<Vec<u8>> {
        let url = format!("{}/services/export/{}", self.base_url, format.path_segment());
        debug!(url = %url, "exporting services");
        let response = self.send(self.http.get(&url)).await?;
        let response = check_status(response).await?;
        let bytes = response.bytes().await.map_err(ApiError::Request)?;
        Ok(bytes.to_vec())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request
            .bearer_auth(self.token)
            .send()
            .await
            .map_err(map_send_err)
    }
}

/// Reject non-success responses; 401 means the token was not accepted.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status.as_u16() == 401 {
        Err(ApiError::AuthRequired)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::ServerError {
            status: status.as_u16(),
            message,
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::ParseError(format!("failed to parse {what}: {e}")))
}
