//! Profile page (protected) with sign-out.

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<AuthConfig>();
    let info = RwSignal::new(String::new());

    let field = move |pick: fn(&guard::User) -> Option<String>| {
        move || auth.get().user.as_ref().and_then(pick).unwrap_or_else(|| "-".to_owned())
    };

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        let config = config.clone();
        info.set("Signing out...".to_owned());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::session::sign_out(&config).await {
                Ok(()) => {
                    auth.update(AuthState::clear);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(e) => info.set(format!("Sign-out failed: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = config;
        }
    };

    view! {
        <section class="profile-page">
            <div class="profile-card bg-surface shadow-card">
                <h1 class="text-primary">"Profile"</h1>
                <dl>
                    <dt>"Email"</dt>
                    <dd>{field(|u| u.email.clone())}</dd>
                    <dt>"User ID"</dt>
                    <dd>{field(|u| Some(u.id.clone()))}</dd>
                    <dt>"Role"</dt>
                    <dd>{field(|u| u.role.clone())}</dd>
                </dl>
                <button class="btn bg-primary" on:click=on_sign_out>"Sign out"</button>
                <Show when=move || !info.get().is_empty()>
                    <p class="profile-card__message">{move || info.get()}</p>
                </Show>
            </div>
        </section>
    }
}
