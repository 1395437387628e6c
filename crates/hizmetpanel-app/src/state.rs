// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use hizmetpanel_core::types::{DashboardStats, ServiceRecord};

use crate::services::app_services::AppServices;

/// The section currently shown inside the shell.
///
/// The form carries its editing target by value: `Some` means update that
/// record, `None` means create. The carried copy is the seed for the form's
/// draft buffer and is never the list's own instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Dashboard,
    Services,
    ServiceForm(Option<ServiceRecord>),
}

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Whether a session token is present.
    pub authenticated: bool,
    /// Selected section inside the shell.
    pub section: Section,
    /// Transient copy of the backend's service list.
    pub services: Vec<ServiceRecord>,
    /// Latest dashboard snapshot.
    pub stats: DashboardStats,
    /// True until the initial paired fetch completes.
    pub loading: bool,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        Self {
            authenticated: svc.is_authenticated(),
            ..Self::default()
        }
    }

    /// Open the form in create mode.
    pub fn open_create(&mut self) {
        self.section = Section::ServiceForm(None);
    }

    /// Open the form with `record` as the editing target.
    pub fn open_edit(&mut self, record: ServiceRecord) {
        self.section = Section::ServiceForm(Some(record));
    }

    /// Leave the form (save or cancel); the editing target is dropped.
    pub fn close_form(&mut self) {
        self.section = Section::Services;
    }

    /// Drop everything session-scoped on logout.
    pub fn reset_on_logout(&mut self) {
        *self = Self::default();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            authenticated: false,
            section: Section::Dashboard,
            services: Vec::new(),
            stats: DashboardStats::default(),
            loading: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hizmetpanel_core::types::{ServiceStatus, ServiceType};

    fn record(id: &str) -> ServiceRecord {
        ServiceRecord {
            id: id.into(),
            name: "example.com".into(),
            service_type: ServiceType::Domain,
            provider: "RegistrarX".into(),
            creation_date: NaiveDate::from_ymd_opt(2023, 5, 1).expect("date"),
            last_renewal_date: None,
            next_renewal_date: None,
            annual_fee: 150.0,
            currency: "TRY".into(),
            status: ServiceStatus::Active,
            notes: None,
        }
    }

    #[test]
    fn starts_on_dashboard_with_no_editing_target() {
        let state = AppState::default();
        assert_eq!(state.section, Section::Dashboard);
        assert!(state.loading);
        assert!(state.services.is_empty());
    }

    #[test]
    fn edit_action_carries_the_record() {
        let mut state = AppState::default();
        state.open_edit(record("1"));
        match &state.section {
            Section::ServiceForm(Some(target)) => assert_eq!(target.id, "1"),
            other => panic!("expected edit target, got {other:?}"),
        }
    }

    #[test]
    fn create_has_no_target_and_close_returns_to_list() {
        let mut state = AppState::default();
        state.open_create();
        assert_eq!(state.section, Section::ServiceForm(None));

        state.close_form();
        assert_eq!(state.section, Section::Services);
    }

    #[test]
    fn closing_an_edit_drops_the_target() {
        let mut state = AppState::default();
        state.open_edit(record("7"));
        state.close_form();
        assert_eq!(state.section, Section::Services);
    }

    #[test]
    fn logout_clears_session_scoped_state() {
        let mut state = AppState {
            authenticated: true,
            section: Section::Services,
            services: vec![record("1")],
            stats: DashboardStats {
                total_services: 1,
                ..DashboardStats::default()
            },
            loading: false,
        };
        state.reset_on_logout();
        assert!(!state.authenticated);
        assert_eq!(state.section, Section::Dashboard);
        assert!(state.services.is_empty());
        assert_eq!(state.stats, DashboardStats::default());
        assert!(state.loading);
    }
}
