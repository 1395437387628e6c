// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Hizmet Panel admin front-end.
//
// The wire shapes match the backend REST API exactly; the backend is the
// sole owner of these records and the client holds transient copies only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Currency code the backend defaults to.
pub const DEFAULT_CURRENCY: &str = "TRY";

/// Fixed set of tracked service categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    Domain,
    Hosting,
    #[serde(rename = "Domain+Hosting")]
    DomainHosting,
    Website,
    Consulting,
}

impl ServiceType {
    /// All categories, in the order the form's select shows them.
    pub const ALL: [ServiceType; 5] = [
        Self::Domain,
        Self::Hosting,
        Self::DomainHosting,
        Self::Website,
        Self::Consulting,
    ];

    /// Wire string, also used as the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Hosting => "Hosting",
            Self::DomainHosting => "Domain+Hosting",
            Self::Website => "Website",
            Self::Consulting => "Consulting",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Domain" => Some(Self::Domain),
            "Hosting" => Some(Self::Hosting),
            "Domain+Hosting" => Some(Self::DomainHosting),
            "Website" => Some(Self::Website),
            "Consulting" => Some(Self::Consulting),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a service is currently billed/renewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Active,
    Inactive,
}

impl ServiceStatus {
    /// Wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Turkish display label used in the table and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Aktif",
            Self::Inactive => "Pasif",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// A tracked recurring service, as returned by the backend.
///
/// Backend bookkeeping fields (`is_deleted`, `created_at`, `updated_at`)
/// are ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Backend-assigned opaque identifier.
    pub id: String,
    pub name: String,
    pub service_type: ServiceType,
    pub provider: String,
    pub creation_date: NaiveDate,
    #[serde(default)]
    pub last_renewal_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_renewal_date: Option<NaiveDate>,
    pub annual_fee: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: ServiceStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Create/update payload — everything in [`ServiceRecord`] except the id.
///
/// The form binds to a draft, never to the list's authoritative record;
/// nothing commits until the backend acknowledges the write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    pub service_type: ServiceType,
    pub provider: String,
    pub creation_date: NaiveDate,
    pub last_renewal_date: Option<NaiveDate>,
    pub next_renewal_date: Option<NaiveDate>,
    pub annual_fee: f64,
    pub currency: String,
    pub status: ServiceStatus,
    pub notes: Option<String>,
}

impl ServiceDraft {
    /// Seed an edit buffer from an existing record.
    pub fn from_record(record: &ServiceRecord) -> Self {
        Self {
            name: record.name.clone(),
            service_type: record.service_type,
            provider: record.provider.clone(),
            creation_date: record.creation_date,
            last_renewal_date: record.last_renewal_date,
            next_renewal_date: record.next_renewal_date,
            annual_fee: record.annual_fee,
            currency: record.currency.clone(),
            status: record.status,
            notes: record.notes.clone(),
        }
    }
}

impl Default for ServiceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            service_type: ServiceType::Domain,
            provider: String::new(),
            creation_date: chrono::Local::now().date_naive(),
            last_renewal_date: None,
            next_renewal_date: None,
            annual_fee: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            status: ServiceStatus::Active,
            notes: None,
        }
    }
}

/// One row of the per-type breakdown.
///
/// The backend emits its aggregation groups verbatim, so the type label
/// arrives under the `_id` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "_id")]
    pub service_type: String,
    pub count: u64,
}

/// Aggregate counters for the dashboard, derived server-side.
///
/// `Default` is the empty snapshot shown before the first fetch completes
/// (and kept when a fetch fails).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_services: u64,
    pub active_services: u64,
    pub total_annual_fees: f64,
    #[serde(default)]
    pub services_by_type: Vec<TypeCount>,
}

/// Format a fee in Turkish lira, whole-lira precision with thousands
/// separators: `150.0` → `"₺150"`, `12500.0` → `"₺12,500"`.
pub fn format_try(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("₺{sign}{grouped}")
}

/// Format a date the way the rest of the UI shows them: `dd.mm.yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
