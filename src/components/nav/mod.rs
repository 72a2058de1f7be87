//! Site navigation bar.
//!
//! Links to every public page plus the auth indicator: Login when nobody is
//! signed in, the user's name and a Logout button otherwise. While the stored
//! token is still being checked the indicator renders nothing, so the button
//! never flickers from Login to Logout on reload.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::router::RouterContext;
use crate::config::SITE_NAME;
use crate::models::{AuthState, Route};
use crate::utils::session;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

#[component]
fn NavLink(route: Route, label: &'static str) -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");
    let class = move || {
        if router.0.get() == route {
            format!("{} {}", css::link, css::linkActive)
        } else {
            css::link.to_string()
        }
    };
    view! { <a href=route.to_hash() class=class>{label}</a> }
}

#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let logout = move |_| {
        session::clear_token();
        ctx.auth.set(AuthState::Guest);
        Route::Home.navigate();
    };

    view! {
        <header class=css::nav>
            <a href=Route::Home.to_hash() class=css::brand>{SITE_NAME}</a>
            <nav class=css::links>
                <NavLink route=Route::Home label="Home" />
                <NavLink route=Route::Members label="Members" />
                <NavLink route=Route::Projects label="Projects" />
                <NavLink route=Route::Gallery label="Gallery" />
                <NavLink route=Route::Blogs label="Blogs" />
            </nav>
            <div class=css::authSlot>
                {move || match ctx.auth.get() {
                    AuthState::Unknown => ().into_any(),
                    AuthState::Guest => view! {
                        <a href=Route::Login.to_hash() class=css::authButton>"Login"</a>
                    }
                    .into_any(),
                    AuthState::SignedIn(name) => view! {
                        <span class=css::userName>{name}</span>
                        <button class=css::authButton on:click=logout>"Logout"</button>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}
