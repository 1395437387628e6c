// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hizmet Panel — admin front-end for recurring client services.
//
// Entry point. Initialises logging and the service layer, and launches the
// Dioxus UI. The root component gates on authentication: login page while
// no session token exists, the sidebar shell otherwise.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::dashboard::Dashboard;
use pages::login::Login;
use pages::service_form::ServiceForm;
use pages::services::Services;

use services::app_services::AppServices;
use state::{AppState, Section};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Hizmet Panel starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "configured backend URL unusable — using defaults");
            AppServices::fallback().expect("even fallback init failed")
        }
    });

    // Provide services and state as context for all pages
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(AppState::new(&svc)));

    let state = use_context::<Signal<AppState>>();

    rsx! {
        if state.read().authenticated {
            Shell {}
        } else {
            Login {}
        }
    }
}

/// Authenticated layout: fixed sidebar, date header, and the selected
/// section. Mounting it kicks off the initial paired fetch.
#[component]
fn Shell() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    // Initial load: list and stats are fetched together and awaited
    // jointly. A failed leg is logged and keeps its default value.
    let svc_load = svc.clone();
    let _initial_load = use_resource(move || {
        let svc = svc_load.clone();
        async move {
            let (services, stats) = tokio::join!(svc.fetch_services(), svc.fetch_stats());
            match services {
                Ok(list) => state.write().services = list,
                Err(e) => tracing::error!(error = %e, "initial service list fetch failed"),
            }
            match stats {
                Ok(snapshot) => state.write().stats = snapshot,
                Err(e) => tracing::error!(error = %e, "initial stats fetch failed"),
            }
            state.write().loading = false;
        }
    });

    let today = chrono::Local::now().format("%d.%m.%Y").to_string();
    let section = state.read().section.clone();

    rsx! {
        div { style: "display: flex; height: 100vh; font-family: system-ui, -apple-system, sans-serif; background: #f5f6f8;",

            // Fixed side menu
            nav { style: "width: 220px; display: flex; flex-direction: column; padding: 16px 12px; background: #1c1c2e; color: white;",
                strong { style: "font-size: 18px; padding: 8px 12px; margin-bottom: 16px;", "Hizmet Panel" }
                NavButton {
                    label: "Kontrol Paneli",
                    active: matches!(&section, Section::Dashboard),
                    onclick: move |_| state.write().section = Section::Dashboard,
                }
                NavButton {
                    label: "Hizmetler",
                    active: matches!(&section, Section::Services),
                    onclick: move |_| state.write().section = Section::Services,
                }
                NavButton {
                    label: "Hizmet Ekle",
                    active: matches!(&section, Section::ServiceForm(_)),
                    onclick: move |_| state.write().open_create(),
                }
                div { style: "flex: 1;" }
                button {
                    style: "padding: 10px 12px; border-radius: 8px; border: 1px solid #44445a; background: transparent; color: #ccc; font-size: 14px; text-align: left;",
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            svc.logout();
                            state.write().reset_on_logout();
                        }
                    },
                    "Çıkış Yap"
                }
            }

            div { style: "flex: 1; display: flex; flex-direction: column;",
                header { style: "display: flex; justify-content: flex-end; padding: 12px 24px; border-bottom: 1px solid #e0e0e0; background: white;",
                    span { style: "color: #666; font-size: 14px;", "{today}" }
                }
                div { style: "flex: 1; overflow-y: auto; padding: 24px;",
                    {match section {
                        Section::Dashboard => rsx! { Dashboard {} },
                        Section::Services => rsx! { Services {} },
                        Section::ServiceForm(target) => {
                            // Key on the target so switching between edit and
                            // create re-seeds the form's draft buffer.
                            let form_key = target
                                .as_ref()
                                .map(|r| r.id.clone())
                                .unwrap_or_else(|| "new".to_string());
                            rsx! { ServiceForm { key: "{form_key}", editing: target } }
                        }
                    }}
                }
            }
        }
    }
}

#[component]
fn NavButton(label: &'static str, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let background = if active { "#007aff" } else { "transparent" };
    rsx! {
        button {
            style: "padding: 10px 12px; margin-bottom: 4px; border-radius: 8px; border: none; background: {background}; color: white; font-size: 14px; text-align: left; cursor: pointer;",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
