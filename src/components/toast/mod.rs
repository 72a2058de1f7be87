//! Toast notifications.
//!
//! Form submissions report success or failure through a small toast queue
//! provided on the [`AppContext`](crate::app::AppContext). Toasts dismiss
//! themselves after a few seconds or on click.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/toast/toast.module.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub kind: ToastKind,
}

/// The toast queue. `Copy` because both fields are signals.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(text.into(), ToastKind::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(text.into(), ToastKind::Error);
    }

    fn push(&self, text: String, kind: ToastKind) {
        let id = self.next_id.try_update(|n| {
            *n += 1;
            *n
        });
        let Some(id) = id else { return };

        self.items.update(|items| items.push(Toast { id, text, kind }));

        // Auto-dismiss; the timer only exists in the browser.
        #[cfg(target_arch = "wasm32")]
        {
            use crate::config::TOAST_DISMISS_MS;

            let queue = *self;
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
                queue.dismiss(id);
            });
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.get()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-position tray rendering the current toast queue.
#[component]
pub fn ToastTray() -> impl IntoView {
    let ctx = use_context::<crate::app::AppContext>().expect("AppContext must be provided");
    let toasts = ctx.toasts;

    view! {
        <div class=css::tray>
            <For
                each=move || toasts.items()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => format!("{} {}", css::toast, css::success),
                        ToastKind::Error => format!("{} {}", css::toast, css::error),
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let owner = Owner::new();
        owner.set();

        let toasts = Toasts::new();
        toasts.success("saved");
        toasts.error("broke");
        let items = toasts.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ToastKind::Success);
        assert_ne!(items[0].id, items[1].id);

        toasts.dismiss(items[0].id);
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].text, "broke");
    }
}
