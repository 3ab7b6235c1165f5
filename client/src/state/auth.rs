//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by `RouteGuard` after each navigation decision and read by
//! identity-dependent pages (board, profile) and the navigation bar.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use guard::{Decision, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    /// A protected navigation is waiting on the session query.
    pub loading: bool,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Fold a guard decision into the state.
    ///
    /// Public allows carry no user and leave the known user untouched; a
    /// redirect means the session is gone. Superseded decisions are ignored.
    pub fn apply(&mut self, decision: &Decision) {
        match decision {
            Decision::Allow { user: Some(user), .. } => {
                self.user = Some(user.clone());
                self.loading = false;
            }
            Decision::Allow { user: None, .. } => self.loading = false,
            Decision::Redirect { .. } => {
                self.user = None;
                self.loading = false;
            }
            Decision::Superseded => {}
        }
    }

    /// Forget the user after sign-out.
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
