// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hizmet Panel — backend REST client and the file-backed session store.
//
// The client attaches the bearer token to every authenticated request and
// never retries; call sites decide what to do with a failure (in practice:
// log it and keep whatever data they already have).

mod auth;
pub mod client;
pub mod error;
pub mod services;
pub mod session;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use services::ExportFormat;
pub use session::SessionStore;
pub use types::LoginResponse;
