//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`SubmitError`] - Form submission (multipart POST) errors
//! - [`SessionError`] - localStorage operations for the auth token

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Request timed out
    Timeout,
    /// Network-level failure (DNS, connection refused, CORS)
    NetworkError(String),
    /// Server responded with a non-success status code
    HttpError(u16),
    /// Failed to read the response body
    ResponseReadFailed,
    /// Response body was not valid text
    InvalidContent,
    /// Response body was not the expected JSON shape
    JsonParseError(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::Timeout => write!(f, "Request timed out"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: status {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Response was not valid text"),
            Self::JsonParseError(msg) => write!(f, "Failed to parse JSON: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Form submission errors for the creation flows.
///
/// The backend answers multipart POSTs with `{message}` on success and
/// `{detail}` on failure; HTTP 409 specifically signals a pre-existing
/// resource (used by member creation).
#[derive(Debug, Clone)]
pub enum SubmitError {
    /// HTTP 409: the resource already exists.
    Conflict(String),
    /// Backend rejected the submission with a detail message.
    Rejected(String),
    /// The request never produced a usable response.
    Transport(FetchError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict(detail) => write!(f, "{}", detail),
            Self::Rejected(detail) => write!(f, "{}", detail),
            Self::Transport(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<FetchError> for SubmitError {
    fn from(err: FetchError) -> Self {
        Self::Transport(err)
    }
}

/// Auth token storage errors.
#[derive(Debug, Clone)]
pub enum SessionError {
    /// localStorage not available.
    StorageUnavailable,
    /// Failed to write to localStorage.
    WriteFailed,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageUnavailable => write!(f, "localStorage not available"),
            Self::WriteFailed => write!(f, "failed to write to localStorage"),
        }
    }
}

impl std::error::Error for SessionError {}
