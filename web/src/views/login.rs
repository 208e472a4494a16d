//! Login page view with email/password form.

use api::ApiClient;
use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let client = use_context::<ApiClient>();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: straight to the home page.
    if session.read().is_authenticated() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = client.login(&email(), &password()).await;
            loading.set(false);
            match session.write().apply_login(result) {
                Ok(()) => {
                    nav.replace(Route::Home {});
                }
                Err(_) => {
                    password.set(String::new());
                    error.set(Some("Invalid email or password".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Login" }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    div { class: "form-group",
                        label { class: "field-label", "Email" }
                        input {
                            class: "field-input",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div { class: "form-group",
                        label { class: "field-label", "Password" }
                        input {
                            class: "field-input",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }

                p { class: "auth-footer",
                    Link { to: Route::ResetPassword {}, "Forgot your password?" }
                }
            }
        }
    }
}
