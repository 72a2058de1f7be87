//! Core page logic, independent of any particular content type.
//!
//! - [`error`] - Error types for fetch, submit, and session storage
//! - [`search`] - Matcher and filter pipeline over searchable records
//! - [`listing`] - Per-page controller: cache store, load phases, filtering

pub mod error;
pub mod listing;
pub mod search;

pub use error::{FetchError, SessionError, SubmitError};
pub use listing::{use_listing, ListingController, ListingPhase};
pub use search::Searchable;
