use api::AdminClient;
use dioxus::prelude::*;
use types::{ApiError, session::Session};

use crate::Route;

#[component]
pub fn Login(#[props(!optional)] error: Option<String>) -> Element {
    let client = use_context::<AdminClient>();
    let session = use_context::<Session>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);

    if session.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let client = client.clone();
        let session = session.clone();
        let name = username();
        let secret = password();

        spawn(async move {
            submitting.set(true);
            failure.set(None);

            match client.login(&name, &secret).await {
                Ok(token) => {
                    session.sign_in(&token.access_token);
                    tracing::info!(username = %name, "signed in");
                    navigator().replace(Route::Dashboard {});
                }
                Err(ApiError::Unauthorized) => {
                    failure.set(Some("Invalid username or password".to_string()));
                }
                Err(err) => {
                    tracing::warn!(%err, "login failed");
                    failure.set(Some(format!("Login failed: {err}")));
                }
            }
            submitting.set(false);
        });
    };

    let message = failure().or(error);

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Matchbook" }
                    p { class: "login-subtitle", "Admin Dashboard" }
                }
                if let Some(message) = message {
                    div { class: "alert alert-danger", "{message}" }
                }
                form { onsubmit: submit,
                    div { class: "form-group",
                        label { class: "form-label", r#for: "username", "Username" }
                        input {
                            id: "username",
                            class: "form-input",
                            r#type: "text",
                            autocomplete: "username",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
