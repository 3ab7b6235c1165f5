//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `BIND_ADDR`: interface to listen on (default `0.0.0.0`)
//! - `PORT`: listen port (default 3000)
//!
//! Log filtering uses `RUST_LOG` through `tracing-subscriber`.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from the process environment.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_values(
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    /// Build config from raw optional values, applying defaults.
    pub fn from_values(bind_addr: Option<&str>, port: Option<&str>) -> Result<Self, ServerError> {
        let bind_addr = match bind_addr.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ServerError::InvalidBindAddr(raw.to_owned()))?,
            None => DEFAULT_BIND_ADDR,
        };
        let port = match port.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ServerError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { bind_addr, port })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
