// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Error types for the backend REST client.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend is offline or unreachable.
    #[error("server unreachable: {0}")]
    ServerUnreachable(String),

    /// Backend returned a non-success status.
    #[error("server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// An authenticated call was attempted without a token, or the backend
    /// rejected the token.
    #[error("authentication required")]
    AuthRequired,

    /// Login was rejected.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid backend base URL.
    #[error("invalid server URL: {0}")]
    InvalidUrl(String),

    /// Response body did not match the expected shape.
    #[error("failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
