//! Route table and navigation guard for the portal SPA.
//!
//! This crate owns the authorization side of client-side routing and is shared
//! by the browser `client` crate and its tests. It has no browser or Leptos
//! dependency: the session backend and the clock are injected through the
//! [`SessionSource`] and [`Timer`] traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route transition asks [`NavigationGuard`] for a [`Decision`]. Public
//! routes are allowed synchronously, protected routes suspend once on a session
//! query, and a newer navigation supersedes older in-flight checks.

mod error;
mod guard;
mod route;
mod session;

pub use error::{GuardError, SessionError};
pub use guard::{DEFAULT_SESSION_TIMEOUT, Decision, DenyReason, GuardConfig, NavigationGuard, NavigationTicket};
pub use route::{Access, LOGIN_PATH, Page, Route, RouteTable};
pub use session::{Session, SessionSource, Timer, User};
