//! Error types for route-table setup and session queries.

/// Failure while querying the authentication backend for the current session.
///
/// The guard never surfaces these to the user; any of them turns into a
/// redirect to the login route with [`crate::DenyReason::QueryFailed`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The backend could not be reached.
    #[error("session backend unreachable: {0}")]
    Transport(String),
    /// The backend answered with an unexpected HTTP status.
    #[error("session backend returned status {0}")]
    Status(u16),
    /// The backend or the persisted session returned a payload we could not parse.
    #[error("session payload malformed: {0}")]
    Decode(String),
    /// Local session storage could not be read or written.
    #[error("session storage unavailable: {0}")]
    Storage(String),
}

/// Invalid route table or guard configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    /// Two routes share the same path.
    #[error("duplicate route path: {0}")]
    DuplicateRoute(String),
    /// A route path is empty or does not start with `/`.
    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),
    /// The configured login path has no route.
    #[error("login path {0} is not in the route table")]
    LoginRouteMissing(String),
    /// The configured login path is protected, which would redirect forever.
    #[error("login path {0} must be public")]
    LoginRouteNotPublic(String),
}
