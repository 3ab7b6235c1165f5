//! Local-storage access for the persisted auth session.
//!
//! Requires a browser environment; outside it reads find nothing and writes
//! are no-ops.

use guard::SessionError;

/// Read `key` from `localStorage`.
///
/// # Errors
///
/// Returns [`SessionError::Storage`] if storage is unavailable or the read fails.
pub fn read(key: &str) -> Result<Option<String>, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?
            .get_item(key)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Ok(None)
    }
}

/// Write `value` under `key`.
///
/// # Errors
///
/// Returns [`SessionError::Storage`] if storage is unavailable or full.
pub fn write(key: &str, value: &str) -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Ok(())
    }
}

/// Remove `key`. Missing keys are not an error.
///
/// # Errors
///
/// Returns [`SessionError::Storage`] if storage is unavailable.
pub fn remove(key: &str) -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .ok_or_else(|| SessionError::Storage("no window".to_owned()))?
        .local_storage()
        .map_err(|e| SessionError::Storage(format!("{e:?}")))?
        .ok_or_else(|| SessionError::Storage("localStorage disabled".to_owned()))
}
