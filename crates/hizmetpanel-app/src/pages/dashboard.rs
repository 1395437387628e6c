// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dashboard page — aggregate counters and the per-type breakdown.
//
// Everything shown here is a server-side snapshot; the client does no
// aggregation of its own.

use dioxus::prelude::*;

use hizmetpanel_core::types::format_try;

use crate::state::AppState;

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<Signal<AppState>>();

    if state.read().loading {
        return rsx! {
            p { style: "text-align: center; color: #aaa; margin: 48px 0;", "Yükleniyor..." }
        };
    }

    let stats = state.read().stats.clone();
    let total_fees = format_try(stats.total_annual_fees);

    rsx! {
        div {
            h1 { "Kontrol Paneli" }

            div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin: 24px 0;",
                StatCard { label: "Toplam Hizmet", value: stats.total_services.to_string() }
                StatCard { label: "Aktif Hizmet", value: stats.active_services.to_string() }
                StatCard { label: "Toplam Yıllık Ücret", value: total_fees }
            }

            h2 { "Hizmet Türüne Göre Dağılım" }
            if stats.services_by_type.is_empty() {
                p { style: "color: #888;", "Henüz aktif hizmet kaydı yok." }
            } else {
                for entry in stats.services_by_type.iter() {
                    div { style: "display: flex; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                        span { "{entry.service_type}" }
                        strong { "{entry.count}" }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div { style: "padding: 20px; border: 1px solid #e0e0e0; border-radius: 12px; background: white;",
            p { style: "margin: 0 0 8px 0; color: #666; font-size: 13px;", "{label}" }
            strong { style: "font-size: 24px;", "{value}" }
        }
    }
}
