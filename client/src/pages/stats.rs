//! Stats page (protected).

use leptos::prelude::*;

#[component]
pub fn StatsPage() -> impl IntoView {
    view! {
        <section class="stats-page">
            <h1 class="text-primary">"Stats"</h1>
            <div class="stats-page__grid">
                <div class="stat-card bg-surface shadow-card">
                    <span class="stat-card__label">"Boards"</span>
                    <span class="stat-card__value text-primary-600">"1"</span>
                </div>
                <div class="stat-card bg-surface shadow-card">
                    <span class="stat-card__label">"Sessions this week"</span>
                    <span class="stat-card__value text-primary-600">"-"</span>
                </div>
            </div>
        </section>
    }
}
