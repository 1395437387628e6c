// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service form — one controlled input set used for both create and update.
//
// The draft is seeded from the editing target (or defaults) once, on mount;
// nothing touches the list's own record until the backend acknowledges the
// save, after which the list and stats are refetched outright.

use chrono::NaiveDate;
use dioxus::prelude::*;

use hizmetpanel_core::types::{ServiceDraft, ServiceRecord, ServiceStatus, ServiceType};

use crate::services::app_services::AppServices;
use crate::state::AppState;

const FIELD_STYLE: &str = "width: 100%; padding: 10px; font-size: 14px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;";
const LABEL_STYLE: &str = "display: block; font-size: 13px; font-weight: bold; margin-bottom: 6px;";

#[component]
pub fn ServiceForm(editing: Option<ServiceRecord>) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let editing_id = editing.as_ref().map(|r| r.id.clone());
    let mut draft = use_signal(|| {
        editing
            .as_ref()
            .map(ServiceDraft::from_record)
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);

    let title = if editing_id.is_some() {
        "Hizmet Düzenle"
    } else {
        "Yeni Hizmet"
    };

    // Render snapshot of the edit buffer; handlers mutate the signal.
    let current = draft.read().clone();
    let creation_value = current.creation_date.format("%Y-%m-%d").to_string();
    let last_renewal_value = optional_date_value(current.last_renewal_date);
    let next_renewal_value = optional_date_value(current.next_renewal_date);
    let notes_value = current.notes.clone().unwrap_or_default();
    let type_value = current.service_type.as_str();
    let status_value = current.status.as_str();
    let can_save = !current.name.trim().is_empty()
        && !current.provider.trim().is_empty()
        && !*saving.read();

    rsx! {
        div { style: "max-width: 640px;",
            h1 { "{title}" }

            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 16px;",
                div {
                    label { style: LABEL_STYLE, "Hizmet Adı" }
                    input {
                        r#type: "text",
                        required: true,
                        placeholder: "example.com",
                        value: "{current.name}",
                        style: FIELD_STYLE,
                        oninput: move |evt| draft.write().name = evt.value().to_string(),
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Tür" }
                    select {
                        style: FIELD_STYLE,
                        value: "{type_value}",
                        onchange: move |evt| {
                            if let Some(st) = ServiceType::from_str(&evt.value()) {
                                draft.write().service_type = st;
                            }
                        },
                        for st in ServiceType::ALL {
                            option { value: st.as_str(), "{st}" }
                        }
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Sağlayıcı" }
                    input {
                        r#type: "text",
                        required: true,
                        value: "{current.provider}",
                        style: FIELD_STYLE,
                        oninput: move |evt| draft.write().provider = evt.value().to_string(),
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Oluşturma Tarihi" }
                    input {
                        r#type: "date",
                        required: true,
                        value: "{creation_value}",
                        style: FIELD_STYLE,
                        onchange: move |evt| {
                            if let Ok(date) = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d") {
                                draft.write().creation_date = date;
                            }
                        },
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Son Yenileme" }
                    input {
                        r#type: "date",
                        value: "{last_renewal_value}",
                        style: FIELD_STYLE,
                        onchange: move |evt| {
                            draft.write().last_renewal_date = parse_optional_date(&evt.value());
                        },
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Sonraki Yenileme" }
                    input {
                        r#type: "date",
                        value: "{next_renewal_value}",
                        style: FIELD_STYLE,
                        onchange: move |evt| {
                            draft.write().next_renewal_date = parse_optional_date(&evt.value());
                        },
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Yıllık Ücret" }
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        value: "{current.annual_fee}",
                        style: FIELD_STYLE,
                        onchange: move |evt| {
                            if let Ok(fee) = evt.value().parse::<f64>()
                                && fee >= 0.0
                            {
                                draft.write().annual_fee = fee;
                            }
                        },
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Para Birimi" }
                    input {
                        r#type: "text",
                        value: "{current.currency}",
                        style: FIELD_STYLE,
                        oninput: move |evt| draft.write().currency = evt.value().to_string(),
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Durum" }
                    select {
                        style: FIELD_STYLE,
                        value: "{status_value}",
                        onchange: move |evt| {
                            if let Some(status) = ServiceStatus::from_str(&evt.value()) {
                                draft.write().status = status;
                            }
                        },
                        option { value: "active", "Aktif" }
                        option { value: "inactive", "Pasif" }
                    }
                }
            }

            div { style: "margin-top: 16px;",
                label { style: LABEL_STYLE, "Notlar" }
                textarea {
                    rows: "3",
                    value: "{notes_value}",
                    style: FIELD_STYLE,
                    oninput: move |evt| {
                        let text = evt.value();
                        draft.write().notes = if text.trim().is_empty() {
                            None
                        } else {
                            Some(text.to_string())
                        };
                    },
                }
            }

            div { style: "display: flex; gap: 12px; margin-top: 24px;",
                button {
                    style: "flex: 1; padding: 14px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; font-weight: bold;",
                    disabled: !can_save,
                    onclick: {
                        let svc = svc.clone();
                        let editing_id = editing_id.clone();
                        move |_| {
                            saving.set(true);
                            let svc = svc.clone();
                            let editing_id = editing_id.clone();
                            let payload = draft.read().clone();
                            spawn(async move {
                                let result = match editing_id.as_deref() {
                                    Some(id) => svc.update_service(id, &payload).await,
                                    None => svc.create_service(&payload).await,
                                };
                                match result {
                                    Ok(record) => {
                                        tracing::info!(id = %record.id, name = %record.name, "service saved");
                                        match svc.fetch_services().await {
                                            Ok(list) => state.write().services = list,
                                            Err(e) => {
                                                tracing::error!(error = %e, "service list refetch failed")
                                            }
                                        }
                                        match svc.fetch_stats().await {
                                            Ok(stats) => state.write().stats = stats,
                                            Err(e) => {
                                                tracing::error!(error = %e, "stats refetch failed")
                                            }
                                        }
                                        state.write().close_form();
                                    }
                                    Err(e) => {
                                        tracing::error!(error = %e, "save failed");
                                        saving.set(false);
                                    }
                                }
                            });
                        }
                    },
                    if *saving.read() { "Kaydediliyor..." } else { "Kaydet" }
                }
                button {
                    style: "padding: 14px 24px; border-radius: 8px; border: 1px solid #ccc; background: white; color: #333; font-size: 16px;",
                    onclick: move |_| state.write().close_form(),
                    "İptal"
                }
            }
        }
    }
}

fn optional_date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Empty (or unparseable) input clears the field; native date inputs only
/// ever emit `""` or a valid `YYYY-MM-DD`.
fn parse_optional_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
