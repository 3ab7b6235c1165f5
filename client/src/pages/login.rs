//! Login page with email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

#[cfg(any(test, feature = "hydrate"))]
use guard::SessionError;
use leptos::prelude::*;

use crate::config::AuthConfig;

/// Where a successful sign-in lands.
pub const AFTER_SIGN_IN_PATH: &str = "/board";

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn sign_in_error_message(err: &SessionError) -> String {
    match err {
        SessionError::Status(400 | 401 | 422) => "Invalid email or password.".to_owned(),
        SessionError::Transport(_) => "Could not reach the sign-in service.".to_owned(),
        other => format!("Sign-in failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AuthConfig>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let config = config.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::session::sign_in_with_password(&config, &email_value, &password_value).await {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(AFTER_SIGN_IN_PATH);
                    }
                }
                Err(e) => {
                    log::warn!("sign-in failed: {e}");
                    info.set(sign_in_error_message(&e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card bg-surface shadow-card">
                <h1 class="text-primary">"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button bg-primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
