//! Login / registration card shown while no session is active.

use dioxus::prelude::*;

use crate::{use_session, SessionState};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Which half of the auth card is active.
#[derive(Clone, Copy, Debug, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

/// Combined login and registration card.
///
/// On success the shared session signal is updated and `on_authenticated`
/// fires; the platform shell decides where to navigate.
#[component]
pub fn AuthView(on_authenticated: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut mode = use_signal(|| AuthMode::Login);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let mut switch_mode = move |next: AuthMode| {
        mode.set(next);
        error.set(None);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            let registering = mode() == AuthMode::Register;
            let fname = first_name().trim().to_string();
            let lname = last_name().trim().to_string();
            if registering && (fname.is_empty() || lname.is_empty()) {
                error.set(Some("Please enter your first and last name".to_string()));
                return;
            }

            loading.set(true);
            let portal = api::connect();
            let sessions = crate::session_store();
            let outcome = if registering {
                api::auth::sign_up(&portal, &sessions, &fname, &lname, &e, &p).await
            } else {
                api::auth::sign_in(&portal, &sessions, &e, &p).await
            };
            match outcome {
                Ok(new_session) => {
                    session.set(SessionState {
                        session: new_session,
                        loading: false,
                    });
                    on_authenticated.call(());
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let submit_label = match (mode(), loading()) {
        (AuthMode::Login, false) => "Login",
        (AuthMode::Login, true) => "Logging in...",
        (AuthMode::Register, false) => "Register",
        (AuthMode::Register, true) => "Registering...",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-screen",
            div {
                class: "auth-card",
                h1 {
                    class: "auth-title",
                    if mode() == AuthMode::Login { "Login" } else { "Register" }
                }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_submit,
                    class: "auth-form",

                    if mode() == AuthMode::Register {
                        div {
                            class: "form-field",
                            label { class: "field-label", "First Name" }
                            input {
                                class: "field-input",
                                r#type: "text",
                                value: first_name(),
                                disabled: loading(),
                                oninput: move |evt: FormEvent| first_name.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            label { class: "field-label", "Last Name" }
                            input {
                                class: "field-input",
                                r#type: "text",
                                value: last_name(),
                                disabled: loading(),
                                oninput: move |evt: FormEvent| last_name.set(evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        label { class: "field-label", "Email" }
                        input {
                            class: "field-input",
                            r#type: "text",
                            value: email(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { class: "field-label", "Password" }
                        input {
                            class: "field-input",
                            r#type: "password",
                            value: password(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "button button-primary",
                        r#type: "submit",
                        disabled: loading(),
                        "{submit_label}"
                    }
                }

                p {
                    class: "auth-switch",
                    if mode() == AuthMode::Login {
                        "Don't have an account? "
                        button {
                            class: "link-button",
                            r#type: "button",
                            onclick: move |_| switch_mode(AuthMode::Register),
                            "Register"
                        }
                    } else {
                        "Already have an account? "
                        button {
                            class: "link-button",
                            r#type: "button",
                            onclick: move |_| switch_mode(AuthMode::Login),
                            "Login"
                        }
                    }
                }
            }
        }
    }
}
