//! Session model and the seams the guard suspends on.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authentication backend and the clock are external. The guard receives
//! them as generic parameters so the browser build can plug in HTTP + timers
//! while tests plug in stubs.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Authenticated user as reported by the auth backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier (UUID string).
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Current session. A session may exist without a user attached.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn for_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Source of the current session, queried once per guarded navigation.
pub trait SessionSource {
    /// Fetch the current session. `Ok(None)` means no session exists.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the backend or local storage fails.
    fn current_session(&self) -> impl Future<Output = Result<Option<Session>, SessionError>>;
}

/// Clock used to bound the session query.
pub trait Timer {
    /// Complete after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
