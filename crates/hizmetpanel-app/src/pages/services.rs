// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Services page — every tracked record in a table, with per-row edit and
// delete actions plus Excel/PDF export.

use dioxus::prelude::*;

use hizmetpanel_client::ExportFormat;
use hizmetpanel_core::types::{format_date, format_try, ServiceStatus};

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Services() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    // Record pending deletion: (id, name). Set by Sil, resolved by the
    // inline confirmation bar.
    let mut pending_delete = use_signal(|| Option::<(String, String)>::None);

    rsx! {
        div {
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { "Hizmetler" }
                div { style: "display: flex; gap: 8px;",
                    ExportButton { format: ExportFormat::Excel, label: "Excel" }
                    ExportButton { format: ExportFormat::Pdf, label: "PDF" }
                    button {
                        style: "padding: 8px 16px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 14px;",
                        onclick: move |_| state.write().open_create(),
                        "Yeni Hizmet"
                    }
                }
            }

            if let Some((id, name)) = pending_delete.read().clone() {
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; margin: 12px 0; border: 1px solid #ff3b30; border-radius: 8px; background: #fff5f5;",
                    span { "\"{name}\" silinsin mi?" }
                    div { style: "display: flex; gap: 8px;",
                        button {
                            style: "padding: 6px 16px; border-radius: 6px; border: none; background: #ff3b30; color: white; font-size: 13px;",
                            onclick: {
                                let svc = svc.clone();
                                move |_| {
                                    pending_delete.set(None);
                                    let svc = svc.clone();
                                    let id = id.clone();
                                    spawn(async move {
                                        if let Err(e) = svc.delete_service(&id).await {
                                            tracing::error!(error = %e, id = %id, "delete failed");
                                            return;
                                        }
                                        tracing::info!(id = %id, "service deleted");
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
                                    });
                                }
                            },
                            "Sil"
                        }
                        button {
                            style: "padding: 6px 16px; border-radius: 6px; border: 1px solid #ccc; background: white; color: #333; font-size: 13px;",
                            onclick: move |_| pending_delete.set(None),
                            "Vazgeç"
                        }
                    }
                }
            }

            if state.read().loading {
                p { style: "text-align: center; color: #aaa; margin: 48px 0;", "Yükleniyor..." }
            } else if state.read().services.is_empty() {
                p { style: "text-align: center; color: #aaa; margin: 48px 0;",
                    "Henüz hizmet kaydı yok."
                }
            } else {
                table { style: "width: 100%; border-collapse: collapse; margin-top: 16px; background: white;",
                    thead {
                        tr { style: "text-align: left; border-bottom: 2px solid #e0e0e0;",
                            th { style: "padding: 10px 8px;", "Hizmet" }
                            th { style: "padding: 10px 8px;", "Tür" }
                            th { style: "padding: 10px 8px;", "Sağlayıcı" }
                            th { style: "padding: 10px 8px;", "Yıllık Ücret" }
                            th { style: "padding: 10px 8px;", "Sonraki Yenileme" }
                            th { style: "padding: 10px 8px;", "Durum" }
                            th { style: "padding: 10px 8px;", "" }
                        }
                    }
                    tbody {
                        for record in state.read().services.iter() {
                            {
                                let edit_target = record.clone();
                                let delete_target = (record.id.clone(), record.name.clone());
                                let fee = format_try(record.annual_fee);
                                let next_renewal = record
                                    .next_renewal_date
                                    .map(format_date)
                                    .unwrap_or_else(|| "-".to_string());
                                rsx! {
                                    tr { style: "border-bottom: 1px solid #f0f0f0;",
                                        td { style: "padding: 10px 8px;", strong { "{record.name}" } }
                                        td { style: "padding: 10px 8px;", "{record.service_type}" }
                                        td { style: "padding: 10px 8px;", "{record.provider}" }
                                        td { style: "padding: 10px 8px;", "{fee}" }
                                        td { style: "padding: 10px 8px;", "{next_renewal}" }
                                        td { style: "padding: 10px 8px;",
                                            span { style: "font-size: 12px; padding: 4px 8px; border-radius: 4px; background: {status_bg(record.status)}; color: {status_fg(record.status)};",
                                                "{record.status.label()}"
                                            }
                                        }
                                        td { style: "padding: 10px 8px;",
                                            div { style: "display: flex; gap: 8px;",
                                                button {
                                                    style: "padding: 4px 12px; border-radius: 4px; border: 1px solid #007aff; color: #007aff; background: white; font-size: 12px;",
                                                    onclick: move |_| state.write().open_edit(edit_target.clone()),
                                                    "Düzenle"
                                                }
                                                button {
                                                    style: "padding: 4px 12px; border-radius: 4px; border: 1px solid #ff3b30; color: #ff3b30; background: white; font-size: 12px;",
                                                    onclick: move |_| pending_delete.set(Some(delete_target.clone())),
                                                    "Sil"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Export button — fetches the document and hands it to a native save
/// dialog. Declining the dialog discards the bytes.
#[component]
fn ExportButton(format: ExportFormat, label: &'static str) -> Element {
    let svc = use_context::<AppServices>();
    let mut exporting = use_signal(|| false);

    rsx! {
        button {
            style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #ccc; background: white; font-size: 14px;",
            disabled: *exporting.read(),
            onclick: {
                let svc = svc.clone();
                move |_| {
                    exporting.set(true);
                    let svc = svc.clone();
                    spawn(async move {
                        match svc.export_services(format).await {
                            Ok(bytes) => {
                                let dialog = rfd::AsyncFileDialog::new()
                                    .set_file_name(format.file_name());
                                if let Some(handle) = dialog.save_file().await
                                    && let Err(e) = handle.write(&bytes).await
                                {
                                    tracing::error!(error = %e, "export save failed");
                                }
                            }
                            Err(e) => tracing::error!(error = %e, "export failed"),
                        }
                        exporting.set(false);
                    });
                }
            },
            "{label}"
        }
    }
}

fn status_bg(s: ServiceStatus) -> &'static str {
    match s {
        ServiceStatus::Active => "#d4edda",
        ServiceStatus::Inactive => "#e2e3e5",
    }
}

fn status_fg(s: ServiceStatus) -> &'static str {
    match s {
        ServiceStatus::Active => "#155724",
        ServiceStatus::Inactive => "#383d41",
    }
}
