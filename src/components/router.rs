//! Application router component.
//!
//! Hash-based routing with native `hashchange` events: the URL hash is the
//! source of truth, so browser back/forward buttons work without a router
//! crate. The navbar stays mounted across navigation; only the page slot
//! re-renders.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::auth::LoginPage;
use crate::components::blogs::BlogsPage;
use crate::components::forms::{AddBlogPage, AddImagePage, AddMemberPage, AddProjectPage};
use crate::components::gallery::GalleryPage;
use crate::components::home::HomePage;
use crate::components::members::MembersPage;
use crate::components::nav::Nav;
use crate::components::projects::ProjectsPage;
use crate::config::messages;
use crate::models::{AuthState, Route};

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Current route, provided to any component that needs it (navbar
/// highlighting, login redirects).
#[derive(Clone, Copy)]
pub struct RouterContext(pub RwSignal<Route>);

/// Gate for the creation pages.
///
/// Renders nothing while the stored token is still being checked, a sign-in
/// prompt for guests, and the page itself once someone is signed in.
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        {move || match ctx.auth.get() {
            AuthState::Unknown => ().into_any(),
            AuthState::Guest => view! {
                <section class=css::gate>
                    <p>{messages::SIGN_IN_REQUIRED}</p>
                    <a href=Route::Login.to_hash()>"Go to sign in"</a>
                </section>
            }
            .into_any(),
            AuthState::SignedIn(_) => children().into_any(),
        }}
    }
}

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(Route::current());
    provide_context(RouterContext(route));

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <Nav />
        <main class=css::main>
            {move || match route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Members => view! { <MembersPage /> }.into_any(),
                Route::Projects => view! { <ProjectsPage /> }.into_any(),
                Route::Gallery => view! { <GalleryPage /> }.into_any(),
                Route::Blogs => view! { <BlogsPage /> }.into_any(),
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::AddMember => view! {
                    <RequireAuth><AddMemberPage /></RequireAuth>
                }
                .into_any(),
                Route::AddProject => view! {
                    <RequireAuth><AddProjectPage /></RequireAuth>
                }
                .into_any(),
                Route::AddImage => view! {
                    <RequireAuth><AddImagePage /></RequireAuth>
                }
                .into_any(),
                Route::AddBlog => view! {
                    <RequireAuth><AddBlogPage /></RequireAuth>
                }
                .into_any(),
            }}
        </main>
    }
}
