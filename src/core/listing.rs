//! Listing page controller: cache store, load state machine, filter wiring.
//!
//! Each listing page owns one [`ListingController`]. It fetches its records
//! exactly once on mount, keeps them in a page-scoped cache signal, and
//! re-runs the filter pipeline synchronously whenever the search query or
//! category tab changes. There is no re-fetch and no retry; reloading the
//! page is the only recovery from a failed load.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

use crate::config::{API_BASE, CATEGORY_ALL};
use crate::core::error::FetchError;
use crate::core::search::{self, Searchable};
use crate::utils::{fetch_json, log};

/// Load state for a listing page.
///
/// Exactly one transition happens per page load: `Loading` → `Loaded` or
/// `Loading` → `Failed`. The cache stays empty unless the load succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingPhase {
    /// Initial state; the fetch has not resolved yet.
    Loading,
    /// Fetch succeeded; the cache holds the fetched records.
    Loaded,
    /// Fetch failed; the cache is empty and stays that way.
    Failed,
}

/// Reactive state for one listing page.
///
/// All fields are Leptos signals, so the struct is `Copy` and can be captured
/// freely by event handlers. The cache signal has a single writer (the fetch
/// completion in [`use_listing`]) and many readers (every filter call).
pub struct ListingController<T: Send + Sync + 'static> {
    /// Page-scoped cache: exactly the last successful fetch's records,
    /// in original order.
    pub records: RwSignal<Vec<T>>,
    /// Where the page is in its load lifecycle.
    pub phase: RwSignal<ListingPhase>,
    /// Current free-text search query.
    pub query: RwSignal<String>,
    /// Currently selected category tab ("all" disables the predicate).
    pub category: RwSignal<String>,
}

impl<T: Send + Sync + 'static> Clone for ListingController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListingController<T> {}

impl<T: Send + Sync + 'static> ListingController<T> {
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(Vec::new()),
            phase: RwSignal::new(ListingPhase::Loading),
            query: RwSignal::new(String::new()),
            category: RwSignal::new(CATEGORY_ALL.to_string()),
        }
    }

    /// Apply the result of the initial fetch.
    ///
    /// On success the cache is replaced wholesale; on failure it stays empty
    /// and the error is logged to the console.
    pub fn resolve(&self, result: Result<Vec<T>, FetchError>) {
        match result {
            Ok(records) => {
                self.records.set(records);
                self.phase.set(ListingPhase::Loaded);
            }
            Err(err) => {
                log::error(&format!("listing fetch failed: {}", err));
                self.phase.set(ListingPhase::Failed);
            }
        }
    }
}

impl<T: Searchable + Clone + Send + Sync + 'static> ListingController<T> {
    /// Records visible for the current query and category, in fetch order.
    ///
    /// Reactive: reads the cache, query, and category signals, so any signal
    /// change re-runs derived views.
    pub fn visible(&self) -> Vec<T> {
        let query = self.query.get();
        let category = self.category.get();
        self.records
            .with(|records| search::filter(records, &query, &category))
    }

    /// Distinct category labels present in the cache, fetch order.
    pub fn categories(&self) -> Vec<String> {
        self.records.with(|records| search::categories(records))
    }

    /// Detail lookup against the cache.
    ///
    /// A miss (stale identifier racing a fresh fetch) is logged and returns
    /// `None`; it is never surfaced to the user.
    pub fn find(&self, id: &str) -> Option<T> {
        let hit = self
            .records
            .with(|records| records.iter().find(|r| r.id() == id).cloned());
        if hit.is_none() {
            log::warn(&format!("record {} not in cache", id));
        }
        hit
    }
}

impl<T: Send + Sync + 'static> Default for ListingController<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a controller for `endpoint` and kick off its one fetch.
pub fn use_listing<T>(endpoint: &str) -> ListingController<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let ctrl = ListingController::new();
    let url = format!("{}{}", API_BASE, endpoint);
    spawn_local(async move {
        ctrl.resolve(fetch_json::<Vec<T>>(&url).await);
    });
    ctrl
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        f();
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Rec {
        id: String,
        name: String,
    }

    impl Rec {
        fn new(id: &str, name: &str) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
            }
        }
    }

    impl Searchable for Rec {
        fn id(&self) -> &str {
            &self.id
        }

        fn text_fields(&self) -> Vec<&str> {
            vec![&self.name]
        }
    }

    #[test]
    fn test_successful_load_populates_cache() {
        with_owner(|| {
            let ctrl = ListingController::<Rec>::new();
            assert_eq!(ctrl.phase.get_untracked(), ListingPhase::Loading);
            assert!(ctrl.records.get_untracked().is_empty());

            ctrl.resolve(Ok(vec![Rec::new("1", "Ada"), Rec::new("2", "Grace")]));
            assert_eq!(ctrl.phase.get_untracked(), ListingPhase::Loaded);
            assert_eq!(ctrl.records.get_untracked().len(), 2);
        });
    }

    #[test]
    fn test_failed_load_leaves_cache_empty() {
        with_owner(|| {
            let ctrl = ListingController::<Rec>::new();
            ctrl.resolve(Err(FetchError::HttpError(500)));
            assert_eq!(ctrl.phase.get_untracked(), ListingPhase::Failed);
            assert!(ctrl.records.get_untracked().is_empty());
        });
    }

    #[test]
    fn test_visible_tracks_query() {
        with_owner(|| {
            let ctrl = ListingController::<Rec>::new();
            ctrl.resolve(Ok(vec![Rec::new("1", "Ada"), Rec::new("2", "Grace")]));

            assert_eq!(ctrl.visible().len(), 2);
            ctrl.query.set("gra".to_string());
            let visible = ctrl.visible();
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].id, "2");
        });
    }

    #[test]
    fn test_find_hit_and_miss() {
        with_owner(|| {
            let ctrl = ListingController::<Rec>::new();
            ctrl.resolve(Ok(vec![Rec::new("1", "Ada")]));

            assert_eq!(ctrl.find("1"), Some(Rec::new("1", "Ada")));
            assert_eq!(ctrl.find("999"), None);
        });
    }
}
