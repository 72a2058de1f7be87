//! Shared listing-page chrome: search box, category tabs, empty and error
//! states.
//!
//! The four listing pages differ only in their record type and cards; the
//! controls that drive the filter pipeline are identical and live here.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::CATEGORY_ALL;

stylance::import_crate_style!(css, "src/components/listing/listing.module.css");

/// Free-text search input bound to a controller's query signal.
///
/// Filtering re-runs on every keystroke; no debounce is needed because the
/// pipeline is synchronous and in-memory.
#[component]
pub fn SearchBox(
    query: RwSignal<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class=css::searchBox>
            <span class=css::searchIcon>
                <Icon icon=ic::SEARCH />
            </span>
            <input
                type="search"
                class=css::searchInput
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Category tab row: a fixed "all" tab plus one tab per category present in
/// the fetched records, in order of first appearance.
#[component]
pub fn CategoryTabs(
    category: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<String>>,
) -> impl IntoView {
    let tabs = Signal::derive(move || {
        let mut tabs = vec![CATEGORY_ALL.to_string()];
        tabs.extend(options.get());
        tabs
    });

    view! {
        <div class=css::tabs role="tablist">
            <For
                each=move || tabs.get()
                key=|tab| tab.clone()
                children=move |tab| {
                    let label = tab.clone();
                    let value = tab.clone();
                    let is_active = move || category.get() == value;
                    let select = tab.clone();
                    view! {
                        <button
                            class=move || {
                                if is_active() {
                                    format!("{} {}", css::tab, css::tabActive)
                                } else {
                                    css::tab.to_string()
                                }
                            }
                            role="tab"
                            on:click=move |_| category.set(select.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}

/// "No results" placeholder. A normal state, visually distinct from a fetch
/// failure.
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class=css::empty>{message}</p> }
}

/// In-place load-failure banner shown instead of the listing.
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class=css::error role="alert">{message}</p> }
}

/// Spinner-free loading placeholder.
#[component]
pub fn LoadingState() -> impl IntoView {
    view! { <p class=css::loading>"Loading..."</p> }
}
