//! Route wrapper that applies the navigation guard before rendering a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route view in `App` is wrapped in `RouteGuard`. Public pages render
//! immediately (also during server rendering); protected pages show a pending
//! placeholder until the session query settles, then either render or replace
//! the history entry with the login route.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use guard::{Decision, NavigationTicket};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppGuard;
use crate::state::auth::AuthState;

/// Render `children` only once the guard allows the current location.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let guard = expect_context::<AppGuard>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let path = destination(&location.pathname.get_untracked(), &location.search.get_untracked());
    let decision = RwSignal::new(guard.decide_without_session(&path));

    // Runs once per mount; each route view mounts its own guard.
    Effect::new(move || {
        let ticket = guard.begin();
        if let Some(public) = decision.get_untracked() {
            auth.update(|state| state.apply(&public));
            return;
        }
        auth.update(|state| state.loading = true);
        spawn_check(guard.clone(), ticket, path.clone(), decision, auth, navigate.clone());
    });

    let allowed = move || matches!(decision.get(), Some(Decision::Allow { .. }));

    view! {
        <Show
            when=allowed
            fallback=|| view! { <div class="route-guard__pending text-primary">"Checking session..."</div> }
        >
            {children()}
        </Show>
    }
}

fn spawn_check<N>(
    guard: AppGuard,
    ticket: NavigationTicket,
    path: String,
    decision: RwSignal<Option<Decision>>,
    auth: RwSignal<AuthState>,
    navigate: N,
) where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = guard.resolve(ticket, &path).await;
        if outcome == Decision::Superseded {
            return;
        }
        let mut redirect = None;
        auth.update(|state| redirect = settle(&outcome, state).map(str::to_owned));
        if let Some(to) = redirect {
            log::info!("route guard: {path} -> {to} ({outcome:?})");
            navigate(&to, redirect_options());
        }
        decision.set(Some(outcome));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (guard, ticket, path, decision, auth, navigate);
    }
}

/// Location handed to the guard: the path plus any query string.
pub(crate) fn destination(pathname: &str, search: &str) -> String {
    match search.trim_start_matches('?') {
        "" => pathname.to_owned(),
        query => format!("{pathname}?{query}"),
    }
}

/// Fold a settled check into `state` and return where to navigate, if
/// anywhere. A superseded check leaves `state` untouched.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn settle<'a>(outcome: &'a Decision, state: &mut AuthState) -> Option<&'a str> {
    match outcome {
        Decision::Superseded => None,
        Decision::Redirect { to, .. } => {
            state.apply(outcome);
            Some(to)
        }
        Decision::Allow { .. } => {
            state.apply(outcome);
            None
        }
    }
}

/// Redirects replace the guarded entry so Back does not return to it.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
