//! Public contact page.

use leptos::prelude::*;

pub const CONTACT_EMAIL: &str = "hello@portal.example";

#[component]
pub fn ContactPage() -> impl IntoView {
    let mailto = format!("mailto:{CONTACT_EMAIL}");
    view! {
        <section class="contact-page">
            <div class="contact-card bg-surface shadow-card">
                <h1 class="text-primary">"Contact"</h1>
                <p>"Questions or feedback? Write to us and we will get back to you."</p>
                <a class="btn bg-primary" href=mailto>{CONTACT_EMAIL}</a>
            </div>
        </section>
    }
}
