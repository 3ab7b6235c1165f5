//! Startup errors for the portal server.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `PORT` is not a valid port number.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    /// `BIND_ADDR` is not an IP address.
    #[error("invalid BIND_ADDR: {0:?}")]
    InvalidBindAddr(String),
    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
