//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`nav`] - Navigation bar with the auth indicator
//! - [`home`] - Landing page
//! - [`members`], [`projects`], [`blogs`], [`gallery`] - Listing pages
//! - [`listing`] - Shared listing chrome (search box, tabs, empty/error states)
//! - [`modal`] - Shared detail-modal wrapper
//! - [`forms`] - Content creation forms
//! - [`auth`] - Login page
//! - [`toast`] - Toast notifications
//! - [`icons`] - Centralized icon definitions

pub mod auth;
pub mod blogs;
pub mod forms;
pub mod gallery;
pub mod home;
pub mod icons;
pub mod listing;
pub mod members;
pub mod modal;
pub mod nav;
pub mod projects;
pub mod router;
pub mod toast;

pub use router::AppRouter;
