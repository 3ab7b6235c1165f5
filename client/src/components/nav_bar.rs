//! Top navigation bar with page links, signed-in identity and sign-out.

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::state::auth::AuthState;

/// Site-wide navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<AuthConfig>();

    let identity = move || {
        auth.get()
            .user
            .map(|user| user.email.unwrap_or(user.id))
    };

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        let config = config.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::session::sign_out(&config).await {
                log::warn!("sign-out failed: {e}");
            }
            auth.update(AuthState::clear);
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = config;
        }
    };

    view! {
        <nav class="nav-bar bg-surface shadow-card">
            <a href="/">"Home"</a>
            <a href="/board">"Board"</a>
            <a href="/stats">"Stats"</a>
            <a href="/profile">"Profile"</a>
            <a href="/contact">"Contact"</a>
            <span class="nav-bar__spacer"></span>
            {move || match identity() {
                Some(name) => view! {
                    <span class="nav-bar__identity">{name}</span>
                    <button class="btn bg-primary" on:click=on_sign_out.clone()>"Sign out"</button>
                }
                .into_any(),
                None => view! { <a href="/login">"Sign in"</a> }.into_any(),
            }}
        </nav>
    }
}
