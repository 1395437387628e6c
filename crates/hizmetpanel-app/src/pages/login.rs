// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Login page — the only view shown while unauthenticated.
//
// Any failure (rejected credentials or a network problem) shows the same
// generic message and re-enables the form.

use dioxus::prelude::*;

use crate::services::app_services::AppServices;
use crate::state::AppState;

const LOGIN_FAILED_MSG: &str = "E-posta veya şifre hatalı.";

#[component]
pub fn Login() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    rsx! {
        div { style: "display: flex; align-items: center; justify-content: center; height: 100vh; background: #f5f6f8; font-family: system-ui, -apple-system, sans-serif;",
            div { style: "width: 360px; padding: 32px; background: white; border-radius: 12px; box-shadow: 0 2px 12px rgba(0,0,0,0.08);",
                h1 { style: "margin: 0 0 4px 0; font-size: 22px;", "Hizmet Panel" }
                p { style: "color: #666; margin: 0 0 24px 0; font-size: 14px;",
                    "Devam etmek için giriş yapın."
                }

                div { style: "margin-bottom: 16px;",
                    label { style: "display: block; font-size: 14px; font-weight: bold; margin-bottom: 6px;",
                        "E-posta"
                    }
                    input {
                        r#type: "email",
                        required: true,
                        placeholder: "ornek@firma.com",
                        value: "{email}",
                        style: "width: 100%; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                        oninput: move |evt| email.set(evt.value().to_string()),
                    }
                }

                div { style: "margin-bottom: 24px;",
                    label { style: "display: block; font-size: 14px; font-weight: bold; margin-bottom: 6px;",
                        "Şifre"
                    }
                    input {
                        r#type: "password",
                        required: true,
                        value: "{password}",
                        style: "width: 100%; padding: 12px; font-size: 15px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                        oninput: move |evt| password.set(evt.value().to_string()),
                    }
                }

                button {
                    style: "width: 100%; padding: 14px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; font-weight: bold;",
                    disabled: email.read().trim().is_empty()
                        || password.read().trim().is_empty()
                        || *submitting.read(),
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            submitting.set(true);
                            error_msg.set(None);

                            let svc = svc.clone();
                            let email = email.read().trim().to_string();
                            let password = password.read().to_string();
                            spawn(async move {
                                match svc.login(&email, &password).await {
                                    Ok(()) => {
                                        tracing::info!("login succeeded");
                                        let mut st = state.write();
                                        st.authenticated = true;
                                    }
                                    Err(e) => {
                                        tracing::warn!(error = %e, "login failed");
                                        error_msg.set(Some(LOGIN_FAILED_MSG.to_string()));
                                        submitting.set(false);
                                    }
                                }
                            });
                        }
                    },
                    if *submitting.read() { "Giriş yapılıyor..." } else { "Giriş Yap" }
                }

                if let Some(ref msg) = *error_msg.read() {
                    p { style: "margin: 16px 0 0 0; padding: 12px; border-radius: 8px; background: #f8d7da; color: #721c24; font-size: 14px; text-align: center;",
                        "{msg}"
                    }
                }
            }
        }
    }
}
