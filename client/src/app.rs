//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use guard::{GuardError, NavigationGuard, Page, RouteTable};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Style, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, route_guard::RouteGuard};
use crate::config::AuthConfig;
use crate::net::session::SupabaseSessions;
use crate::pages::{
    board::BoardPage, contact::ContactPage, home::HomePage, login::LoginPage, profile::ProfilePage, stats::StatsPage,
};
use crate::state::auth::AuthState;
use crate::theme;
use crate::util::timer::BrowserTimer;

/// Navigation guard as wired in the browser.
pub type AppGuard = NavigationGuard<SupabaseSessions, BrowserTimer>;

/// Build the guard over the portal route table.
///
/// # Errors
///
/// Returns a [`GuardError`] if the route table and guard config disagree on the
/// login route.
pub fn build_guard(config: &AuthConfig) -> Result<AppGuard, GuardError> {
    NavigationGuard::new(
        SupabaseSessions::new(config.clone()),
        BrowserTimer,
        RouteTable::portal(),
        config.guard_config(),
    )
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-surface">
                <App/>
            </body>
        </html>
    }
}

/// Router segment for `page`: its portal path without the leading slash.
pub(crate) fn segment(page: Page) -> &'static str {
    page.portal_path().trim_start_matches('/')
}

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Contact => view! { <ContactPage/> }.into_any(),
        Page::Board => view! { <BoardPage/> }.into_any(),
        Page::Profile => view! { <ProfilePage/> }.into_any(),
        Page::Stats => view! { <StatsPage/> }.into_any(),
    }
}

fn guarded(page: Page) -> impl IntoView {
    view! { <RouteGuard>{page_view(page)}</RouteGuard> }
}

/// Root application component.
///
/// Provides config, guard and auth contexts and wraps every route, and the
/// not-found fallback, in `RouteGuard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AuthConfig::from_build_env();
    let guard = match build_guard(&config) {
        Ok(guard) => guard,
        Err(e) => {
            return view! { <p class="app-error">{format!("Route setup failed: {e}")}</p> }.into_any();
        }
    };

    provide_context(config);
    provide_context(guard);
    provide_context(RwSignal::new(AuthState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Style>{theme::stylesheet()}</Style>
        <Title text="Portal"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <RouteGuard>"Page not found."</RouteGuard> }>
                    <Route path=StaticSegment(segment(Page::Home)) view=|| guarded(Page::Home)/>
                    <Route path=StaticSegment(segment(Page::Login)) view=|| guarded(Page::Login)/>
                    <Route path=StaticSegment(segment(Page::Contact)) view=|| guarded(Page::Contact)/>
                    <Route path=StaticSegment(segment(Page::Board)) view=|| guarded(Page::Board)/>
                    <Route path=StaticSegment(segment(Page::Profile)) view=|| guarded(Page::Profile)/>
                    <Route path=StaticSegment(segment(Page::Stats)) view=|| guarded(Page::Stats)/>
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}
