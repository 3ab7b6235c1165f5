//! Static route table with per-route authorization classification.
//!
//! DESIGN
//! ======
//! Classification is a single enum field, so a route cannot be both public and
//! protected. The table rejects duplicate paths at construction, which keeps
//! one classification per path for the lifetime of the process.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::collections::HashSet;

use crate::error::GuardError;

/// Path of the login route; redirect target for unauthenticated navigation.
pub const LOGIN_PATH: &str = "/login";

/// Authorization classification of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Reachable without a session.
    Public,
    /// Requires a session with a user.
    Protected,
}

/// Renderable target of a route. Opaque to the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Contact,
    Board,
    Profile,
    Stats,
}

impl Page {
    pub const ALL: [Page; 6] = [Page::Home, Page::Login, Page::Contact, Page::Board, Page::Profile, Page::Stats];

    /// Path the page is mounted at in the portal. The route table and the
    /// client router both read paths from here.
    #[must_use]
    pub const fn portal_path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Login => LOGIN_PATH,
            Page::Contact => "/contact",
            Page::Board => "/board",
            Page::Profile => "/profile",
            Page::Stats => "/stats",
        }
    }
}

/// A navigable location in the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
    pub access: Access,
}

impl Route {
    #[must_use]
    pub const fn public(path: &'static str, page: Page) -> Self {
        Self { path, page, access: Access::Public }
    }

    #[must_use]
    pub const fn protected(path: &'static str, page: Page) -> Self {
        Self { path, page, access: Access::Protected }
    }
}

const PORTAL_ROUTES: [Route; 6] = [
    Route::public(Page::Home.portal_path(), Page::Home),
    Route::public(Page::Login.portal_path(), Page::Login),
    Route::public(Page::Contact.portal_path(), Page::Contact),
    Route::protected(Page::Board.portal_path(), Page::Board),
    Route::protected(Page::Profile.portal_path(), Page::Profile),
    Route::protected(Page::Stats.portal_path(), Page::Stats),
];

/// Ordered, immutable set of routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from route descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::InvalidPath`] for a path that does not start with
    /// `/` and [`GuardError::DuplicateRoute`] when two routes share a path.
    pub fn new(routes: Vec<Route>) -> Result<Self, GuardError> {
        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(GuardError::InvalidPath(route.path.to_owned()));
            }
            if !seen.insert(normalize(route.path)) {
                return Err(GuardError::DuplicateRoute(route.path.to_owned()));
            }
        }
        Ok(Self { routes })
    }

    /// The application's six routes: three public, three protected.
    #[must_use]
    pub fn portal() -> Self {
        Self { routes: PORTAL_ROUTES.to_vec() }
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Look up the route matching `path`, ignoring query, fragment and a
    /// trailing slash.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Route> {
        let wanted = normalize(path);
        self.routes.iter().find(|route| normalize(route.path) == wanted)
    }

    /// Classification of `path`. Paths outside the table are protected.
    #[must_use]
    pub fn access_for(&self, path: &str) -> Access {
        self.find(path).map_or(Access::Protected, |route| route.access)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::portal()
    }
}

/// Strip `?query`, `#fragment` and a trailing `/` (except on the root).
pub(crate) fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
