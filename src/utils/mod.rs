//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`], [`post_json`], [`post_form`] - Network access with timeout
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`format`] - Date, initials, and counter formatting
//! - [`session`] - Bearer-token persistence in localStorage

pub mod dom;
mod fetch;
pub mod format;
pub mod log;
mod markdown;
pub mod session;

pub use fetch::{
    fetch_json, fetch_json_auth, post_form, post_json, race_with_timeout, ApiMessage, RaceResult,
};
pub use markdown::markdown_to_html;
