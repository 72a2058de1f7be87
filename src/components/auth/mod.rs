//! Login page.
//!
//! Posts credentials, stores the returned bearer token, and resolves the
//! signed-in name through `/api/users/me` so the navbar greets the editor.
//! Session mechanics beyond the token itself belong to the backend.

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::{endpoints, API_BASE};
use crate::models::{AuthState, CurrentUser, LoginResponse, Route};
use crate::utils::{fetch_json_auth, log, post_json, session};

stylance::import_crate_style!(css, "src/components/auth/auth.module.css");

#[derive(Serialize)]
struct LoginPayload {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = LoginPayload {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        busy.set(true);
        spawn_local(async move {
            let login_url = format!("{}{}", API_BASE, endpoints::LOGIN);
            match post_json::<LoginPayload, LoginResponse>(&login_url, &payload).await {
                Ok(resp) => {
                    if let Err(err) = session::set_token(&resp.token) {
                        log::warn(&format!("token not persisted: {}", err));
                    }
                    // Resolve the display name; fall back to the email if
                    // the profile fetch fails.
                    let me_url = format!("{}{}", API_BASE, endpoints::ME);
                    let name = match fetch_json_auth::<CurrentUser>(&me_url, &resp.token).await {
                        Ok(user) => user.name,
                        Err(_) => payload.email.clone(),
                    };
                    ctx.auth.set(AuthState::SignedIn(name));
                    Route::AddProject.navigate();
                }
                Err(err) => {
                    log::warn(&format!("login failed: {}", err));
                    ctx.toasts.error("Invalid email or password.");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class=css::page>
            <form class=css::form on:submit=submit>
                <h1 class=css::heading>"Sign in"</h1>
                <label class=css::field>
                    <span>"Email"</span>
                    <input
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class=css::field>
                    <span>"Password"</span>
                    <input
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class=css::submit disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </section>
    }
}
