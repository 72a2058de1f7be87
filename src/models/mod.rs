//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Member`], [`Project`], [`BlogPost`], [`GalleryItem`] - Content records
//! - [`AuthState`], [`CurrentUser`], [`LoginResponse`] - Sign-in session
//! - [`Route`] - Hash-based navigation

mod blog;
mod gallery;
mod member;
mod project;
mod route;
mod session;

pub use blog::BlogPost;
pub use gallery::GalleryItem;
pub use member::Member;
pub use project::Project;
pub use route::Route;
pub use session::{AuthState, CurrentUser, LoginResponse};
