//! Shared detail-modal wrapper.
//!
//! Every detail view (member, project, blog reader, gallery lightbox) renders
//! inside this wrapper. It closes on the backdrop, on the close button, and
//! on Escape.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/modal/modal.module.css");

#[component]
pub fn Modal(on_close: Callback<()>, children: Children) -> impl IntoView {
    // Escape closes the topmost modal; the listener is removed with the modal.
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class=css::backdrop on:click=move |_| on_close.run(())>
            <div class=css::dialog on:click=move |ev| ev.stop_propagation()>
                <button
                    class=css::closeButton
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    <Icon icon=ic::CLOSE />
                </button>
                {children()}
            </div>
        </div>
    }
}
