//! Navigation guard: decides whether a route transition may proceed.
//!
//! ARCHITECTURE
//! ============
//! `resolve` has exactly one suspension point, the session query, and only for
//! protected destinations. The query races the configured timeout. Public
//! destinations are decided synchronously through `decide_without_session`.
//!
//! TRADE-OFFS
//! ==========
//! A failed or timed-out query redirects to login like a missing session, but
//! keeps its own `DenyReason` so callers and logs can tell them apart.
//! Overlapping navigations are ordered by a generation counter: a check whose
//! ticket is no longer current resolves to `Superseded` and must be ignored.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::pin::pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures::future::{Either, select};

use crate::error::GuardError;
use crate::route::{Access, LOGIN_PATH, RouteTable};
use crate::session::{Session, SessionSource, Timer, User};

/// Upper bound on a single session query.
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(5);

/// Guard settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    /// Redirect target for unauthenticated navigation. Must be a public route.
    pub login_path: String,
    /// How long to wait for the session query before redirecting.
    pub session_timeout: Duration,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self { login_path: LOGIN_PATH.to_owned(), session_timeout: DEFAULT_SESSION_TIMEOUT }
    }
}

/// Why a protected navigation was redirected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    /// The backend reported no session.
    NoSession,
    /// A session exists but carries no user.
    NoUser,
    /// The session query returned an error.
    QueryFailed,
    /// The session query did not settle before the timeout.
    TimedOut,
}

/// Outcome of a guarded navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Proceed to the requested path. `user` is set for protected routes.
    Allow { path: String, user: Option<User> },
    /// Go to `to` (the login route) instead.
    Redirect { to: String, reason: DenyReason },
    /// A newer navigation started while this one was being checked.
    Superseded,
}

impl Decision {
    /// Path the navigation should land on, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Allow { path, .. } => Some(path),
            Self::Redirect { to, .. } => Some(to),
            Self::Superseded => None,
        }
    }
}

/// Identifies one navigation attempt. Newer attempts invalidate older tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationTicket(u64);

enum SessionCheck {
    Authenticated(User),
    Denied(DenyReason),
}

/// Gate for every route transition.
///
/// Clones share the generation counter, so a navigation started through any
/// clone supersedes checks pending on the others.
#[derive(Clone)]
pub struct NavigationGuard<S, T> {
    sessions: S,
    timer: T,
    table: Arc<RouteTable>,
    config: Arc<GuardConfig>,
    generation: Arc<AtomicU64>,
}

impl<S, T> NavigationGuard<S, T> {
    /// Create a guard over `table`.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::LoginRouteMissing`] if the login path has no route
    /// and [`GuardError::LoginRouteNotPublic`] if that route is protected.
    pub fn new(sessions: S, timer: T, table: RouteTable, config: GuardConfig) -> Result<Self, GuardError> {
        match table.find(&config.login_path) {
            None => return Err(GuardError::LoginRouteMissing(config.login_path)),
            Some(route) if route.access != Access::Public => {
                return Err(GuardError::LoginRouteNotPublic(config.login_path));
            }
            Some(_) => {}
        }
        Ok(Self {
            sessions,
            timer,
            table: Arc::new(table),
            config: Arc::new(config),
            generation: Arc::new(AtomicU64::new(0)),
        })
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Start a navigation attempt, superseding any attempt still in flight.
    pub fn begin(&self) -> NavigationTicket {
        NavigationTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recent navigation attempt.
    #[must_use]
    pub fn is_current(&self, ticket: NavigationTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Decide without touching the session source.
    ///
    /// Returns `Some(Allow)` for public destinations and `None` when a session
    /// query is required.
    #[must_use]
    pub fn decide_without_session(&self, destination: &str) -> Option<Decision> {
        match self.table.access_for(destination) {
            Access::Public => {
                log::debug!("guard: allow public {destination}");
                Some(Decision::Allow { path: destination.to_owned(), user: None })
            }
            Access::Protected => None,
        }
    }
}

impl<S: SessionSource, T: Timer> NavigationGuard<S, T> {
    /// Start a navigation to `destination` and decide it.
    pub async fn check(&self, destination: &str) -> Decision {
        let ticket = self.begin();
        self.resolve(ticket, destination).await
    }

    /// Decide the navigation identified by `ticket`.
    pub async fn resolve(&self, ticket: NavigationTicket, destination: &str) -> Decision {
        if let Some(decision) = self.decide_without_session(destination) {
            return decision;
        }

        let check = self.query_session().await;
        if !self.is_current(ticket) {
            log::debug!("guard: check for {destination} superseded");
            return Decision::Superseded;
        }

        match check {
            SessionCheck::Authenticated(user) => {
                log::debug!("guard: allow {destination} for user {}", user.id);
                Decision::Allow { path: destination.to_owned(), user: Some(user) }
            }
            SessionCheck::Denied(reason) => {
                log::debug!("guard: redirect {destination} -> {} ({reason:?})", self.config.login_path);
                Decision::Redirect { to: self.config.login_path.clone(), reason }
            }
        }
    }

    async fn query_session(&self) -> SessionCheck {
        let query = pin!(self.sessions.current_session());
        let deadline = pin!(self.timer.sleep(self.config.session_timeout));

        match select(query, deadline).await {
            Either::Left((Ok(Some(Session { user: Some(user) })), _)) => SessionCheck::Authenticated(user),
            Either::Left((Ok(Some(_)), _)) => SessionCheck::Denied(DenyReason::NoUser),
            Either::Left((Ok(None), _)) => SessionCheck::Denied(DenyReason::NoSession),
            Either::Left((Err(err), _)) => {
                log::warn!("guard: session query failed: {err}");
                SessionCheck::Denied(DenyReason::QueryFailed)
            }
            Either::Right(((), _)) => {
                log::warn!("guard: session query timed out after {:?}", self.config.session_timeout);
                SessionCheck::Denied(DenyReason::TimedOut)
            }
        }
    }
}
