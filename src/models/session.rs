//! Sign-in session state.

use serde::Deserialize;

/// Who the navbar believes is signed in.
///
/// Starts as [`Unknown`](AuthState::Unknown) until the stored token (if any)
/// has been checked against `GET /api/users/me`; the auth button renders
/// nothing in that window to avoid a Login→Logout flicker.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Token check has not resolved yet.
    #[default]
    Unknown,
    /// No token, or the token was rejected.
    Guest,
    /// Token accepted; holds the signed-in user's display name.
    SignedIn(String),
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}

/// Response shape of `GET /api/users/me`.
#[derive(Clone, Debug, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub email: Option<String>,
}

/// Response shape of `POST /api/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(AuthState::default(), AuthState::Unknown);
        assert!(!AuthState::Unknown.is_signed_in());
        assert!(AuthState::SignedIn("Ada".to_string()).is_signed_in());
    }
}
