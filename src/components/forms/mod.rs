//! Content creation forms.
//!
//! One page per content type, mirroring the listing pages. Each form posts
//! itself as multipart `FormData` with the stored bearer token attached; the
//! field names match what the backend's form handlers expect. Shared pieces
//! (labelled fields, the image picker with preview, the submit flow) live
//! here.

mod add_blog;
mod add_image;
mod add_member;
mod add_project;

pub use add_blog::AddBlogPage;
pub use add_image::AddImagePage;
pub use add_member::AddMemberPage;
pub use add_project::AddProjectPage;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::FormData;

use crate::components::toast::Toasts;
use crate::config::API_BASE;
use crate::core::SubmitError;
use crate::utils::{dom, post_form, session};

stylance::import_crate_style!(css, "src/components/forms/forms.module.css");

/// A labelled form control.
#[component]
pub(self) fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <label class=css::field>
            <span class=css::fieldLabel>{label}</span>
            {children()}
        </label>
    }
}

/// File input with a client-side image preview.
///
/// Object URLs are revoked when replaced so repeated picks don't leak blobs.
#[component]
pub(self) fn ImagePicker(
    name: &'static str,
    label: &'static str,
    preview: RwSignal<Option<String>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let on_pick = move |ev: leptos::ev::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| dom::first_file(&input))
            .and_then(|file| dom::object_url(&file));
        if let Some(old) = preview.get_untracked() {
            dom::revoke_object_url(&old);
        }
        preview.set(picked);
    };

    view! {
        <label class=css::field>
            <span class=css::fieldLabel>{label}</span>
            <input type="file" name=name accept="image/*" required=required on:change=on_pick />
            {move || preview.get().map(|url| view! {
                <img class=css::preview src=url alt="Upload preview" />
            })}
        </label>
    }
}

/// POST a form's `FormData` to a creation endpoint and toast the outcome.
///
/// Returns `true` on success so callers can reset the form. A 409 conflict
/// is reported with `conflict_message` when one is given (member creation),
/// otherwise with the backend's detail text.
pub(self) async fn submit(
    endpoint: &str,
    data: FormData,
    toasts: Toasts,
    conflict_message: Option<&'static str>,
) -> bool {
    let url = format!("{}{}", API_BASE, endpoint);
    let token = session::token();
    match post_form(&url, &data, token.as_deref()).await {
        Ok(reply) => {
            toasts.success(reply.message);
            true
        }
        Err(SubmitError::Conflict(detail)) => {
            toasts.error(conflict_message.map(str::to_string).unwrap_or(detail));
            false
        }
        Err(err) => {
            toasts.error(err.to_string());
            false
        }
    }
}
