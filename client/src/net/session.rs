//! Session source backed by the auth service's `auth/v1` HTTP API.
//!
//! Client-side (hydrate): the persisted session is read from `localStorage`,
//! renewed with the refresh-token grant once its access token expires, and
//! validated with `GET /auth/v1/user` via `gloo-net`.
//! Server-side (SSR): no session is ever reported; protected pages are only
//! decided in the browser.
//!
//! ERROR HANDLING
//! ==============
//! An absent session, an expired one that cannot be refreshed, or a rejected
//! token (401/403, or 400/401 from the refresh grant) is `Ok(None)`, not an
//! error. Transport failures, unexpected statuses and malformed payloads are
//! `SessionError`s so the guard can log them separately from "signed out".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use guard::{Session, SessionError, SessionSource, User};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::util::storage;

/// Session as persisted in local storage after sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry as Unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<User>,
}

impl StoredSession {
    /// Whether the access token has expired at `now_secs`. Sessions without an
    /// expiry never expire locally.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_secs)
    }

    pub fn action_at(&self, now_secs: i64) -> StoredAction {
        if !self.is_expired(now_secs) {
            return StoredAction::Validate;
        }
        match self.refresh_token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => StoredAction::Refresh(token.to_owned()),
            None => StoredAction::Discard,
        }
    }
}

/// What to do with a stored session before asking the backend about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredAction {
    /// The access token is still live; validate it as is.
    Validate,
    /// The access token expired; exchange this refresh token first.
    Refresh(String),
    /// Expired with no refresh token; forget it.
    Discard,
}

/// Body of a successful password or refresh-token grant.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl TokenResponse {
    /// Convert into the persisted form, deriving `expires_at` from
    /// `expires_in` when the backend omits it.
    pub fn into_stored(self, now_secs: i64) -> StoredSession {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now_secs + secs));
        StoredSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: Some(self.user),
        }
    }
}

/// How a `/auth/v1/user` response status is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    Ok,
    /// The token was rejected; treat as signed out.
    Unauthorized,
    Unexpected(u16),
}

pub fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Ok,
        401 | 403 => StatusClass::Unauthorized,
        other => StatusClass::Unexpected(other),
    }
}

/// Interpret a refresh-token grant status. The backend answers 400 for an
/// unknown or revoked refresh token.
pub fn classify_refresh_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Ok,
        400 | 401 => StatusClass::Unauthorized,
        other => StatusClass::Unexpected(other),
    }
}

pub fn refresh_request_body(refresh_token: &str) -> serde_json::Value {
    serde_json::json!({ "refresh_token": refresh_token })
}

/// Parse the persisted session JSON.
///
/// # Errors
///
/// Returns [`SessionError::Decode`] if the stored value is not a session.
pub fn parse_stored_session(raw: &str) -> Result<StoredSession, SessionError> {
    serde_json::from_str(raw).map_err(|e| SessionError::Decode(format!("stored session: {e}")))
}

/// [`SessionSource`] talking to the auth backend.
#[derive(Clone, Debug)]
pub struct SupabaseSessions {
    config: AuthConfig,
}

impl SupabaseSessions {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

impl SessionSource for SupabaseSessions {
    fn current_session(&self) -> impl Future<Output = Result<Option<Session>, SessionError>> {
        fetch_session(&self.config)
    }
}

/// Fetch the current session, validating the stored token with the backend.
///
/// # Errors
///
/// Returns a [`SessionError`] on storage, transport, status or decode failure.
pub async fn fetch_session(config: &AuthConfig) -> Result<Option<Session>, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(raw) = storage::read(&config.storage_key)? else {
            return Ok(None);
        };
        let mut stored = parse_stored_session(&raw)?;
        match stored.action_at(now_secs()) {
            StoredAction::Validate => {}
            StoredAction::Refresh(refresh_token) => {
                let Some(fresh) = refresh_session(config, &refresh_token).await? else {
                    log::debug!("refresh token rejected; clearing");
                    storage::remove(&config.storage_key)?;
                    return Ok(None);
                };
                stored = fresh;
            }
            StoredAction::Discard => {
                log::debug!("stored session expired; clearing");
                storage::remove(&config.storage_key)?;
                return Ok(None);
            }
        }

        let resp = gloo_net::http::Request::get(&config.user_endpoint())
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {}", stored.access_token))
            .send()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;

        match classify_status(resp.status()) {
            StatusClass::Ok => {
                let user = resp
                    .json::<User>()
                    .await
                    .map_err(|e| SessionError::Decode(e.to_string()))?;
                Ok(Some(Session::for_user(user)))
            }
            StatusClass::Unauthorized => {
                log::debug!("stored session rejected by backend; clearing");
                storage::remove(&config.storage_key)?;
                Ok(None)
            }
            StatusClass::Unexpected(code) => Err(SessionError::Status(code)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Ok(None)
    }
}

/// Sign in with email and password and persist the returned session.
///
/// # Errors
///
/// Returns [`SessionError::Status`] when the backend rejects the credentials,
/// or another [`SessionError`] on transport, decode or storage failure.
pub async fn sign_in_with_password(config: &AuthConfig, email: &str, password: &str) -> Result<User, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&config.password_grant_endpoint())
            .header("apikey", &config.anon_key)
            .json(&body)
            .map_err(|e| SessionError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(SessionError::Status(resp.status()));
        }

        let token = resp
            .json::<TokenResponse>()
            .await
            .map_err(|e| SessionError::Decode(e.to_string()))?;
        let user = token.user.clone();
        persist(config, &token.into_stored(now_secs()))?;
        log::info!("signed in as {}", user.id);
        Ok(user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(SessionError::Transport("sign-in requires a browser".to_owned()))
    }
}

/// Revoke the session with the backend (best effort) and forget it locally.
///
/// # Errors
///
/// Returns [`SessionError::Storage`] if the stored session cannot be removed.
pub async fn sign_out(config: &AuthConfig) -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let stored = storage::read(&config.storage_key)?.map(|raw| parse_stored_session(&raw));
        if let Some(Ok(stored)) = stored {
            let result = gloo_net::http::Request::post(&config.logout_endpoint())
                .header("apikey", &config.anon_key)
                .header("Authorization", &format!("Bearer {}", stored.access_token))
                .send()
                .await;
            if let Err(e) = result {
                log::warn!("logout request failed: {e}");
            }
        }
    }
    storage::remove(&config.storage_key)
}

/// Exchange a refresh token for a new session and persist it. `Ok(None)`
/// means the backend no longer accepts the refresh token.
#[cfg(feature = "hydrate")]
async fn refresh_session(config: &AuthConfig, refresh_token: &str) -> Result<Option<StoredSession>, SessionError> {
    let resp = gloo_net::http::Request::post(&config.refresh_grant_endpoint())
        .header("apikey", &config.anon_key)
        .json(&refresh_request_body(refresh_token))
        .map_err(|e| SessionError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SessionError::Transport(e.to_string()))?;

    match classify_refresh_status(resp.status()) {
        StatusClass::Ok => {
            let token = resp
                .json::<TokenResponse>()
                .await
                .map_err(|e| SessionError::Decode(e.to_string()))?;
            let stored = token.into_stored(now_secs());
            persist(config, &stored)?;
            log::debug!("stored session refreshed");
            Ok(Some(stored))
        }
        StatusClass::Unauthorized => Ok(None),
        StatusClass::Unexpected(code) => Err(SessionError::Status(code)),
    }
}

#[cfg(feature = "hydrate")]
fn persist(config: &AuthConfig, stored: &StoredSession) -> Result<(), SessionError> {
    let raw = serde_json::to_string(stored).map_err(|e| SessionError::Decode(e.to_string()))?;
    storage::write(&config.storage_key, &raw)
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}
