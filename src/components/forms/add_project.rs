//! Project creation form.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::FormData;

use super::{submit, Field, ImagePicker};
use crate::app::AppContext;
use crate::config::endpoints;

stylance::import_crate_style!(css, "src/components/forms/forms.module.css");

#[component]
pub fn AddProjectPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let preview = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        let Ok(data) = FormData::new_with_form(&form) else {
            ctx.toasts.error("Could not read the form.");
            return;
        };
        busy.set(true);
        spawn_local(async move {
            if submit(endpoints::PROJECTS, data, ctx.toasts, None).await {
                form.reset();
                preview.set(None);
            }
            busy.set(false);
        });
    };

    view! {
        <section class=css::page>
            <form class=css::form node_ref=form_ref on:submit=on_submit>
                <h1 class=css::heading>"Add Project"</h1>
                <Field label="Title">
                    <input type="text" name="projectTitle" required=true />
                </Field>
                <Field label="Description">
                    <textarea name="projectDescription" rows="4" required=true></textarea>
                </Field>
                <Field label="Tech stack (comma separated)">
                    <input type="text" name="techStack" placeholder="Rust, Leptos, Postgres" required=true />
                </Field>
                <Field label="GitHub link">
                    <input type="url" name="githubLink" required=true />
                </Field>
                <Field label="LinkedIn link">
                    <input type="url" name="linkedinLink" required=true />
                </Field>
                <ImagePicker name="projectImage" label="Project image" preview=preview required=true />
                <button type="submit" class=css::submit disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Add project" }}
                </button>
            </form>
        </section>
    }
}
