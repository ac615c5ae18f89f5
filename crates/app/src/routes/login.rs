use client::actions::{landing, submit_login};
use client::Redirect;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdStethoscope;
use dioxus_free_icons::Icon;
use shared_types::{AppError, EMAIL_FIELD};
use shared_ui::{Alert, Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, Input};

use crate::routes::{full_navigation, try_begin, Route};
use crate::session::use_session;
use crate::PortalContext;

/// Sign-in screen. Inputs survive a failed attempt so the doctor can retry.
#[component]
pub fn Login() -> Element {
    let portal = use_context::<PortalContext>();
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut loading = use_signal(|| false);

    let store = session.store.clone();
    use_effect(move || {
        if landing(&store) == Some(Redirect::Dashboard) {
            navigator().replace(Route::Dashboard {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if !try_begin(loading) {
            return;
        }
        error.set(None);

        let api = portal.api.clone();
        let mut session = session.clone();
        spawn(async move {
            match submit_login(api.as_ref(), &session.store, &email(), &password()).await {
                Ok(signed_in) => {
                    session.current.set(Some(signed_in));
                    full_navigation(Route::Dashboard {});
                }
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        });
    };

    let current_error = error();
    let email_error = current_error
        .as_ref()
        .and_then(|e| e.field_error(EMAIL_FIELD))
        .map(str::to_string);
    let banner = current_error
        .as_ref()
        .filter(|e| e.field_errors.is_empty())
        .map(|e| e.user_message().to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    div { class: "auth-brand",
                        Icon::<LdStethoscope> { icon: LdStethoscope, width: 32, height: 32 }
                        h1 { class: "auth-title", "Global Clinic" }
                        p { class: "auth-subtitle", "Doctor Portal" }
                    }
                }

                CardContent {
                    if let Some(message) = banner {
                        Alert { "{message}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            id: "email",
                            label: "Email Address",
                            input_type: "email",
                            placeholder: "doctor@example.com",
                            required: true,
                            disabled: loading(),
                            value: email(),
                            error: email_error,
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            required: true,
                            disabled: loading(),
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            loading_label: "Signing in...",
                            "Sign In"
                        }
                    }
                }

                CardFooter {
                    span { class: "auth-footnote", "Secure access for medical professionals" }
                }
            }
        }
    }
}
