//! Bearer-token persistence.
//!
//! The token returned by the login endpoint is kept in localStorage so a
//! signed-in editor survives navigation and reloads. Absence of a token
//! simply means guest mode.

use crate::config::AUTH_TOKEN_KEY;
use crate::core::error::SessionError;

use super::dom;

/// Get the stored bearer token, if any.
pub fn token() -> Option<String> {
    let storage = dom::local_storage()?;
    storage.get_item(AUTH_TOKEN_KEY).ok()?
}

/// Store the bearer token after a successful login.
pub fn set_token(token: &str) -> Result<(), SessionError> {
    let storage = dom::local_storage().ok_or(SessionError::StorageUnavailable)?;
    storage
        .set_item(AUTH_TOKEN_KEY, token)
        .map_err(|_| SessionError::WriteFailed)
}

/// Drop the stored token (logout, or the backend rejected it).
pub fn clear_token() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
    }
}
