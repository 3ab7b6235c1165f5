//! Board page (protected).

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Personal board. Only rendered after the guard found a signed-in user.
#[component]
pub fn BoardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get()
            .user
            .and_then(|user| user.email)
            .map_or_else(|| "Welcome back.".to_owned(), |email| format!("Welcome back, {email}."))
    };

    view! {
        <section class="board-page">
            <h1 class="text-primary">"Board"</h1>
            <p>{greeting}</p>
            <div class="board-page__columns">
                <div class="board-column bg-surface shadow-card">"To do"</div>
                <div class="board-column bg-surface shadow-card">"In progress"</div>
                <div class="board-column bg-surface shadow-card">"Done"</div>
            </div>
        </section>
    }
}
