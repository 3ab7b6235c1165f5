//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <div class="home-page__hero bg-surface shadow-card">
                <h1 class="text-primary">"Portal"</h1>
                <p>"Your board, profile and stats in one place."</p>
                <a href="/board" class="btn bg-primary">"Open your board"</a>
                <a href="/contact" class="btn border-primary text-primary">"Contact us"</a>
            </div>
        </section>
    }
}
