// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the API client and the session store, and
// provides async-friendly methods for the Dioxus UI to call.
//
// Every authenticated call reads the token at call time and passes it into
// the client explicitly; nothing here consults ambient global state.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use hizmetpanel_client::error::{ApiError, Result};
use hizmetpanel_client::{ApiClient, ExportFormat, SessionStore};
use hizmetpanel_core::types::{DashboardStats, ServiceDraft, ServiceRecord};
use hizmetpanel_core::AppConfig;
use tracing::{error, info, warn};

use super::data_dir;

const CONFIG_FILE: &str = "config.json";
const SESSION_FILE: &str = "session.json";

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are cheaply cloneable (Arc-wrapped) so that the struct can be
/// passed into closures and async blocks without lifetime issues.
#[derive(Clone)]
pub struct AppServices {
    api: Arc<ApiClient>,
    session: Arc<Mutex<SessionStore>>,
    config: AppConfig,
}

impl AppServices {
    /// Initialise all services.  Call once at app startup.
    ///
    /// Loads `config.json` from the data directory (or defaults), applies
    /// the environment override, and restores any persisted session token.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_default().with_env_override();
        Self::new(config, dir.join(SESSION_FILE))
    }

    /// Initialise against default settings, ignoring any stored config.
    pub fn fallback() -> Result<Self> {
        let dir = data_dir::data_dir();
        Self::new(AppConfig::default(), dir.join(SESSION_FILE))
    }

    /// Build the service layer from explicit parts.
    pub fn new(config: AppConfig, session_path: PathBuf) -> Result<Self> {
        let api = ApiClient::new(&config.api_base_url)?;
        let session = SessionStore::load(session_path);

        info!(api = %api.base_url(), "app services initialised");

        Ok(Self {
            api: Arc::new(api),
            session: Arc::new(Mutex::new(session)),
            config,
        })
    }

    /// Current settings.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // -- Session -------------------------------------------------------------

    /// Whether a session token is present.
    pub fn is_authenticated(&self) -> bool {
        self.session
            .lock()
            .expect("session lock poisoned")
            .is_authenticated()
    }

    /// Exchange credentials for a token and store it.
    ///
    /// On any failure (network or rejected credentials) the stored session
    /// is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let response = self.api.login(email, password).await?;

        let mut session = self.session.lock().expect("session lock poisoned");
        if let Err(e) = session.set_token(response.token) {
            warn!(error = %e, "token not persisted; session lasts this run only");
        }
        Ok(())
    }

    /// Clear the session, synchronously, with no backend call.
    pub fn logout(&self) {
        let mut session = self.session.lock().expect("session lock poisoned");
        if let Err(e) = session.clear() {
            error!(error = %e, "failed to remove persisted session");
        }
        info!("logged out");
    }

    fn token(&self) -> Result<String> {
        self.session
            .lock()
            .expect("session lock poisoned")
            .token()
            .map(str::to_string)
            .ok_or(ApiError::AuthRequired)
    }

    // -- Backend data --------------------------------------------------------

    /// Fetch every service record.
    pub async fn fetch_services(&self) -> Result<Vec<ServiceRecord>> {
        let token = self.token()?;
        self.api.services(&token).list().await
    }

    /// Fetch the dashboard snapshot.
    pub async fn fetch_stats(&self) -> Result<DashboardStats> {
        let token = self.token()?;
        self.api.services(&token).dashboard_stats().await
    }

    /// Create a record from the form's draft.
    pub async fn create_service(&self, draft: &ServiceDraft) -> Result<ServiceRecord> {
        let token = self.token()?;
        self.api.services(&token).create(draft).await
    }

    /// Update an existing record.
    pub async fn update_service(&self, id: &str, draft: &ServiceDraft) -> Result<ServiceRecord> {
        let token = self.token()?;
        self.api.services(&token).update(id, draft).await
    }

    /// Delete a record.
    pub async fn delete_service(&self, id: &str) -> Result<()> {
        let token = self.token()?;
        self.api.services(&token).delete(id).await
    }

    /// Fetch an export document (Excel or PDF) as raw bytes.
    pub async fn export_services(&self, format: ExportFormat) -> Result<Vec<u8>> {
        let token = self.token()?;
        self.api.services(&token).export(format).await
    }
}

fn load_config(data_dir: &std::path::Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn services_for(server: &MockServer, dir: &tempfile::TempDir) -> AppServices {
        let config = AppConfig {
            api_base_url: server.uri(),
        };
        AppServices::new(config, dir.path().join("session.json")).expect("services")
    }

    async fn mount_login(server: &MockServer, status: u16) {
        let template = if status == 200 {
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "authenticated",
                "message": "Login successful"
            }))
        } else {
            ResponseTemplate::new(status)
        };
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn successful_login_stores_and_persists_token() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        mount_login(&server, 200).await;

        let svc = services_for(&server, &dir);
        assert!(!svc.is_authenticated());

        svc.login("bilgi@example.com", "secret").await.expect("login");
        assert!(svc.is_authenticated());

        // Token survives a reload of the session file.
        let again = services_for(&server, &dir);
        assert!(again.is_authenticated());
    }

    #[tokio::test]
    async fn rejected_login_leaves_prior_state_untouched() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        mount_login(&server, 401).await;

        // Seed a prior session.
        let mut seeded = SessionStore::load(dir.path().join("session.json"));
        seeded.set_token("earlier-token".into()).expect("seed");
        drop(seeded);

        let svc = services_for(&server, &dir);
        let result = svc.login("someone@example.com", "wrong").await;
        assert!(matches!(result, Err(ApiError::AuthFailed(_))));

        // Prior token is still there.
        let session = SessionStore::load(dir.path().join("session.json"));
        assert_eq!(session.token(), Some("earlier-token"));
        assert!(svc.is_authenticated());
    }

    #[tokio::test]
    async fn logout_always_clears() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        mount_login(&server, 200).await;

        let svc = services_for(&server, &dir);

        // Logout with no session is a no-op.
        svc.logout();
        assert!(!svc.is_authenticated());

        svc.login("bilgi@example.com", "secret").await.expect("login");
        svc.logout();
        assert!(!svc.is_authenticated());
        assert!(!SessionStore::load(dir.path().join("session.json")).is_authenticated());
    }

    #[tokio::test]
    async fn authenticated_calls_require_a_token() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");

        let svc = services_for(&server, &dir);
        assert!(matches!(
            svc.fetch_services().await,
            Err(ApiError::AuthRequired)
        ));
        assert!(matches!(
            svc.fetch_stats().await,
            Err(ApiError::AuthRequired)
        ));
        assert!(matches!(
            svc.delete_service("1").await,
            Err(ApiError::AuthRequired)
        ));
    }

    #[tokio::test]
    async fn fetches_use_the_stored_token() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        mount_login(&server, 200).await;

        Mock::given(method("GET"))
            .and(path("/services"))
            .and(wiremock::matchers::header(
                "Authorization",
                "Bearer authenticated",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let svc = services_for(&server, &dir);
        svc.login("bilgi@example.com", "secret").await.expect("login");

        let list = svc.fetch_services().await.expect("list");
        assert!(list.is_empty());
    }

    #[test]
    fn rejects_invalid_base_url() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            api_base_url: "not-a-url".into(),
        };
        let result = AppServices::new(config, dir.path().join("session.json"));
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}
