//! Image gallery page with category tabs and a lightbox.

use leptos::prelude::*;

use crate::components::listing::{CategoryTabs, EmptyState, ErrorBanner, LoadingState, SearchBox};
use crate::components::modal::Modal;
use crate::config::{endpoints, messages};
use crate::core::{use_listing, ListingController, ListingPhase};
use crate::models::GalleryItem;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

#[component]
fn GalleryCard(item: GalleryItem, on_open: Callback<String>) -> impl IntoView {
    let id = item.id.clone();
    view! {
        <figure class=css::card on:click=move |_| on_open.run(id.clone())>
            {item.image_url.clone().map(|url| view! {
                <img class=css::cardImage src=url alt=item.caption.clone() loading="lazy" />
            })}
            <figcaption class=css::cardCaption>{item.caption.clone()}</figcaption>
        </figure>
    }
}

#[component]
fn Lightbox(item: GalleryItem, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal on_close=on_close>
            <figure class=css::lightbox>
                {item.image_url.clone().map(|url| view! {
                    <img class=css::lightboxImage src=url alt=item.caption.clone() />
                })}
                <figcaption>
                    <h2>{item.caption.clone()}</h2>
                    <span class=css::lightboxCategory>{item.category.clone()}</span>
                    <p class=css::lightboxDescription>{item.description.clone()}</p>
                </figcaption>
            </figure>
        </Modal>
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctrl: ListingController<GalleryItem> = use_listing(endpoints::GALLERY);
    let selected = RwSignal::new(None::<GalleryItem>);
    let visible = Signal::derive(move || ctrl.visible());
    let categories = Signal::derive(move || ctrl.categories());

    let open = Callback::new(move |id: String| {
        if let Some(item) = ctrl.find(&id) {
            selected.set(Some(item));
        }
    });
    let close = Callback::new(move |_| selected.set(None));

    view! {
        <section class=css::page>
            <h1 class=css::heading>"Gallery"</h1>
            <SearchBox query=ctrl.query placeholder="Search images by caption or description..." />
            <CategoryTabs category=ctrl.category options=categories />
            {move || match ctrl.phase.get() {
                ListingPhase::Loading => view! { <LoadingState /> }.into_any(),
                ListingPhase::Failed => view! {
                    <ErrorBanner message=messages::load_failed("gallery images") />
                }
                .into_any(),
                ListingPhase::Loaded => view! {
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <EmptyState message=messages::no_results("gallery images") />
                    </Show>
                    <div class=css::grid>
                        <For
                            each=move || visible.get()
                            key=|item| item.id.clone()
                            children=move |item| view! {
                                <GalleryCard item=item on_open=open />
                            }
                        />
                    </div>
                }
                .into_any(),
            }}
            {move || selected.get().map(|item| view! {
                <Lightbox item=item on_close=close />
            })}
        </section>
    }
}
