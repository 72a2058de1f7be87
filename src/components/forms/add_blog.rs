//! Blog post creation form.
//!
//! The body is markdown; the read time is entered as a plain number of
//! minutes and formatted server-side ("5 min read").

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::FormData;

use super::{submit, Field, ImagePicker};
use crate::app::AppContext;
use crate::config::endpoints;

stylance::import_crate_style!(css, "src/components/forms/forms.module.css");

#[component]
pub fn AddBlogPage() -> impl IntoView {
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
            if submit(endpoints::BLOGS, data, ctx.toasts, None).await {
                form.reset();
                preview.set(None);
            }
            busy.set(false);
        });
    };

    view! {
        <section class=css::page>
            <form class=css::form node_ref=form_ref on:submit=on_submit>
                <h1 class=css::heading>"Add Blog Post"</h1>
                <Field label="Title">
                    <input type="text" name="title" required=true />
                </Field>
                <Field label="Content (markdown)">
                    <textarea name="content" rows="10" required=true></textarea>
                </Field>
                <Field label="Date">
                    <input type="date" name="date" required=true />
                </Field>
                <Field label="Category">
                    <input type="text" name="category" placeholder="engineering" required=true />
                </Field>
                <Field label="Author">
                    <input type="text" name="author" required=true />
                </Field>
                <Field label="Read time (minutes)">
                    <input type="number" name="readTime" min="1" required=true />
                </Field>
                <Field label="Tags (comma separated)">
                    <input type="text" name="tags" placeholder="launch, web" required=true />
                </Field>
                <ImagePicker name="image" label="Cover image" preview=preview required=true />
                <button type="submit" class=css::submit disabled=move || busy.get()>
                    {move || if busy.get() { "Publishing..." } else { "Add post" }}
                </button>
            </form>
        </section>
    }
}
