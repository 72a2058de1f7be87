//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! startup token check that resolves the navbar's auth indicator.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::toast::{ToastTray, Toasts};
use crate::components::AppRouter;
use crate::config::{endpoints, API_BASE};
use crate::models::{AuthState, CurrentUser};
use crate::utils::{fetch_json_auth, log, session};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`. `Copy` because every field
/// is a signal (or a bundle of signals).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Who is signed in, as far as the client knows.
    pub auth: RwSignal<AuthState>,

    /// Toast notification queue.
    pub toasts: Toasts,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            auth: RwSignal::new(AuthState::Unknown),
            toasts: Toasts::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the stored token (if any) against `/api/users/me` and resolve the
/// auth state. Runs once at startup; a rejected token is dropped so the
/// navbar falls back to the Login button.
fn resolve_session(auth: RwSignal<AuthState>) {
    let Some(token) = session::token() else {
        auth.set(AuthState::Guest);
        return;
    };
    spawn_local(async move {
        let url = format!("{}{}", API_BASE, endpoints::ME);
        match fetch_json_auth::<CurrentUser>(&url, &token).await {
            Ok(user) => auth.set(AuthState::SignedIn(user.name)),
            Err(err) => {
                log::warn(&format!("stored token rejected: {}", err));
                session::clear_token();
                auth.set(AuthState::Guest);
            }
        }
    });
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    resolve_session(ctx.auth);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="padding: 2rem; text-align: center;">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul style="list-style: none; color: #b00020;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <AppRouter />
            <ToastTray />
        </ErrorBoundary>
    }
}
