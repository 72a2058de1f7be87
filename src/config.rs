//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application:
//! API endpoints, timeouts, storage keys, and user-facing message literals.

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name displayed in the navbar and page titles.
pub const SITE_NAME: &str = "Atrium Collective";

/// Tagline displayed on the home page hero.
pub const SITE_TAGLINE: &str = "A student collective building things for the web.";

/// Founding date as a Unix timestamp in seconds (2025-01-21 00:00 UTC).
///
/// Used by the home page to display a running "days active" counter.
pub const FOUNDED_UNIX: f64 = 1_737_417_600.0;

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL for the backend API. Empty string means same-origin.
pub const API_BASE: &str = "";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// API endpoints.
pub mod endpoints {
    pub const MEMBERS: &str = "/api/members";
    pub const PROJECTS: &str = "/api/projects";
    pub const GALLERY: &str = "/api/gallery";
    pub const BLOGS: &str = "/api/blogs";
    pub const LOGIN: &str = "/api/login";
    pub const ME: &str = "/api/users/me";
}

// =============================================================================
// Session Configuration
// =============================================================================

/// localStorage key for the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

// =============================================================================
// UI Configuration
// =============================================================================

/// Toast auto-dismiss delay in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 4000;

/// Category tab label that disables category filtering.
pub const CATEGORY_ALL: &str = "all";

/// User-facing message literals, parameterized per content type.
///
/// The listing pages share two message shapes: a "no results" line shown when
/// a valid search yields nothing (a normal state), and a "could not load" line
/// shown when the initial fetch fails. They are deliberately distinct.
pub mod messages {
    /// "No {noun} found matching your search."
    pub fn no_results(noun: &str) -> String {
        format!("No {noun} found matching your search.")
    }

    /// "Could not load {noun}. Please try again later."
    pub fn load_failed(noun: &str) -> String {
        format!("Could not load {noun}. Please try again later.")
    }

    /// Shown when a member creation POST returns HTTP 409.
    pub const MEMBER_EXISTS: &str = "A member with this email already exists.";

    /// Generic form submission failure when the backend gives no detail.
    pub const SUBMIT_FAILED: &str = "Submission failed. Please try again.";

    /// Shown on protected pages when no one is signed in.
    pub const SIGN_IN_REQUIRED: &str = "You need to sign in to add content.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_literals() {
        assert_eq!(
            messages::no_results("projects"),
            "No projects found matching your search."
        );
        assert_eq!(
            messages::load_failed("projects"),
            "Could not load projects. Please try again later."
        );
    }
}
