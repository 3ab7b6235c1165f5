//! Auth backend configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so values are read with
//! `option_env!` when the crate is compiled:
//!
//! - `PORTAL_AUTH_URL`: auth backend base URL (default `http://localhost:54321`)
//! - `PORTAL_AUTH_ANON_KEY`: public API key sent as `apikey` (default empty)
//! - `PORTAL_SESSION_TIMEOUT_MS`: guard session-query timeout (default 5000)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use guard::GuardConfig;

pub const DEFAULT_AUTH_URL: &str = "http://localhost:54321";
pub const DEFAULT_SESSION_TIMEOUT_MS: u64 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base URL without trailing slash.
    pub url: String,
    pub anon_key: String,
    /// Local-storage key holding the persisted session.
    pub storage_key: String,
    pub session_timeout: Duration,
}

impl AuthConfig {
    /// Config from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTAL_AUTH_URL"),
            option_env!("PORTAL_AUTH_ANON_KEY"),
            option_env!("PORTAL_SESSION_TIMEOUT_MS"),
        )
    }

    /// Config from raw optional values, applying defaults.
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_AUTH_URL)
            .trim_end_matches('/')
            .to_owned();
        let storage_key = storage_key_for(&url);
        Self {
            storage_key,
            url,
            anon_key: anon_key.unwrap_or_default().trim().to_owned(),
            session_timeout: Duration::from_millis(parse_timeout_ms(timeout_ms)),
        }
    }

    pub fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.url)
    }

    pub fn password_grant_endpoint(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.url)
    }

    pub fn refresh_grant_endpoint(&self) -> String {
        format!("{}/auth/v1/token?grant_type=refresh_token", self.url)
    }

    pub fn logout_endpoint(&self) -> String {
        format!("{}/auth/v1/logout", self.url)
    }

    /// Guard settings derived from this config.
    pub fn guard_config(&self) -> GuardConfig {
        GuardConfig { session_timeout: self.session_timeout, ..GuardConfig::default() }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

/// Storage key for the persisted session: `sb-<project-ref>-auth-token`,
/// where the project ref is the first label of the backend host.
pub fn storage_key_for(url: &str) -> String {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = without_scheme.split(['/', ':']).next().unwrap_or_default();
    let project_ref = host.split('.').next().filter(|r| !r.is_empty()).unwrap_or("local");
    format!("sb-{project_ref}-auth-token")
}

fn parse_timeout_ms(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_SESSION_TIMEOUT_MS)
}
