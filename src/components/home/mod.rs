//! Landing page: hero, stats strip, and shortcuts to the listing pages.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{endpoints, API_BASE, FOUNDED_UNIX, SITE_NAME, SITE_TAGLINE};
use crate::models::{Member, Project, Route};
use crate::utils::{fetch_json, format, log};

stylance::import_crate_style!(css, "src/components/home/home.module.css");

/// Fetch a listing and count it, for the stats strip.
///
/// A failed count is displayed as a dash rather than an error; the stats are
/// decoration, not content.
fn count_of<T>(endpoint: &str, into: RwSignal<Option<usize>>)
where
    T: serde::de::DeserializeOwned + Send + Sync + 'static,
{
    let url = format!("{}{}", API_BASE, endpoint);
    spawn_local(async move {
        match fetch_json::<Vec<T>>(&url).await {
            Ok(records) => into.set(Some(records.len())),
            Err(err) => log::warn(&format!("stat count failed: {}", err)),
        }
    });
}

#[component]
fn Stat(value: Signal<String>, label: &'static str) -> impl IntoView {
    view! {
        <div class=css::stat>
            <span class=css::statValue>{value}</span>
            <span class=css::statLabel>{label}</span>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let project_count = RwSignal::new(None::<usize>);
    let member_count = RwSignal::new(None::<usize>);
    count_of::<Project>(endpoints::PROJECTS, project_count);
    count_of::<Member>(endpoints::MEMBERS, member_count);

    let show = |count: RwSignal<Option<usize>>| {
        Signal::derive(move || {
            count
                .get()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "—".to_string())
        })
    };
    let days = Signal::derive(move || format::days_since(FOUNDED_UNIX).to_string());

    view! {
        <section class=css::hero>
            <h1 class=css::title>{SITE_NAME}</h1>
            <p class=css::tagline>{SITE_TAGLINE}</p>
            <div class=css::stats>
                <Stat value=show(project_count) label="Projects" />
                <Stat value=show(member_count) label="Members" />
                <Stat value=days label="Days active" />
            </div>
            <div class=css::shortcuts>
                <a href=Route::Projects.to_hash() class=css::shortcut>"Browse projects"</a>
                <a href=Route::Members.to_hash() class=css::shortcut>"Meet the team"</a>
                <a href=Route::Blogs.to_hash() class=css::shortcut>"Read the blog"</a>
            </div>
        </section>
    }
}
