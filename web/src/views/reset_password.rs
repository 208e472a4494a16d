//! Password reset request page.

use api::ApiClient;
use dioxus::prelude::*;

/// Asks the backend to email a reset link. The acknowledgement is
/// fire-and-forget; only a status line is shown either way.
#[component]
pub fn ResetPassword() -> Element {
    let client = use_context::<ApiClient>();
    let mut email = use_signal(String::new);
    let mut status = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            status.set(None);
            loading.set(true);
            let result = client.send_password_reset(&email()).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    status.set(Some(
                        "Password reset email sent. Please check your inbox.".to_string(),
                    ));
                }
                Err(err) => {
                    tracing::error!("password reset request failed: {err}");
                    status.set(Some(
                        "Failed to send password reset email. Please try again.".to_string(),
                    ));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Reset Password" }

                if let Some(message) = status() {
                    div { class: "form-status", "{message}" }
                }

                form { class: "auth-form", onsubmit: handle_submit,
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

                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        "Send Reset Email"
                    }
                }
            }
        }
    }
}
