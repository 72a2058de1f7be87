//! Member creation form.
//!
//! The only form with a conflict case: the backend answers 409 when the
//! email already belongs to a member, surfaced here with a dedicated message.
//! Photo and resume are optional.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::FormData;

use super::{submit, Field, ImagePicker};
use crate::app::AppContext;
use crate::config::{endpoints, messages};

stylance::import_crate_style!(css, "src/components/forms/forms.module.css");

#[component]
pub fn AddMemberPage() -> impl IntoView {
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
            if submit(
                endpoints::MEMBERS,
                data,
                ctx.toasts,
                Some(messages::MEMBER_EXISTS),
            )
            .await
            {
                form.reset();
                preview.set(None);
            }
            busy.set(false);
        });
    };

    view! {
        <section class=css::page>
            <form class=css::form node_ref=form_ref on:submit=on_submit>
                <h1 class=css::heading>"Add Member"</h1>
                <Field label="Full name">
                    <input type="text" name="fullName" required=true />
                </Field>
                <Field label="Role">
                    <input type="text" name="role" placeholder="Designer" required=true />
                </Field>
                <Field label="Email">
                    <input type="email" name="email" required=true />
                </Field>
                <Field label="Password">
                    <input type="password" name="password" required=true />
                </Field>
                <Field label="LinkedIn profile">
                    <input type="url" name="linkedin" />
                </Field>
                <Field label="GitHub profile">
                    <input type="url" name="github" />
                </Field>
                <ImagePicker name="profileImage" label="Profile photo (optional)" preview=preview />
                <Field label="Resume (optional)">
                    <input type="file" name="resume" accept="application/pdf" />
                </Field>
                <label class=css::checkboxField>
                    <input type="checkbox" name="adminPrivileges" value="true" />
                    <span>"Grant admin privileges"</span>
                </label>
                <button type="submit" class=css::submit disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Add member" }}
                </button>
            </form>
        </section>
    }
}
