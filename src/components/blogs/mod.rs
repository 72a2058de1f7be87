//! Blog listing page and reader.
//!
//! Blogs carry a category, so this page adds the tab row on top of free-text
//! search. The reader modal renders the post body as sanitized markdown.

use leptos::prelude::*;

use crate::components::listing::{CategoryTabs, EmptyState, ErrorBanner, LoadingState, SearchBox};
use crate::components::modal::Modal;
use crate::config::{endpoints, messages};
use crate::core::{use_listing, ListingController, ListingPhase};
use crate::models::BlogPost;
use crate::utils::{format, markdown_to_html};

stylance::import_crate_style!(css, "src/components/blogs/blogs.module.css");

fn byline(post: &BlogPost) -> String {
    format!(
        "{} · {} · {}",
        post.author,
        format::format_date(&post.date),
        post.read_time
    )
}

#[component]
fn BlogCard(post: BlogPost, on_open: Callback<String>) -> impl IntoView {
    let id = post.id.clone();
    let meta = byline(&post);
    view! {
        <article class=css::card on:click=move |_| on_open.run(id.clone())>
            {post.image_url.clone().map(|url| view! {
                <img class=css::cardImage src=url alt=post.title.clone() />
            })}
            <span class=css::cardCategory>{post.category.clone()}</span>
            <h3 class=css::cardTitle>{post.title.clone()}</h3>
            <p class=css::cardMeta>{meta}</p>
            <ul class=css::tags>
                {post
                    .tags
                    .iter()
                    .map(|tag| view! { <li class=css::tag>{tag.clone()}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
}

#[component]
fn BlogReader(post: BlogPost, on_close: Callback<()>) -> impl IntoView {
    let body = markdown_to_html(&post.content);
    let meta = byline(&post);
    view! {
        <Modal on_close=on_close>
            <article class=css::reader>
                {post.image_url.clone().map(|url| view! {
                    <img class=css::readerImage src=url alt=post.title.clone() />
                })}
                <h2>{post.title.clone()}</h2>
                <p class=css::readerMeta>{meta}</p>
                <div class=css::readerBody inner_html=body></div>
            </article>
        </Modal>
    }
}

#[component]
pub fn BlogsPage() -> impl IntoView {
    let ctrl: ListingController<BlogPost> = use_listing(endpoints::BLOGS);
    let selected = RwSignal::new(None::<BlogPost>);
    let visible = Signal::derive(move || ctrl.visible());
    let categories = Signal::derive(move || ctrl.categories());

    let open = Callback::new(move |id: String| {
        if let Some(post) = ctrl.find(&id) {
            selected.set(Some(post));
        }
    });
    let close = Callback::new(move |_| selected.set(None));

    view! {
        <section class=css::page>
            <h1 class=css::heading>"Blog"</h1>
            <SearchBox query=ctrl.query placeholder="Search posts by title, author, or tag..." />
            <CategoryTabs category=ctrl.category options=categories />
            {move || match ctrl.phase.get() {
                ListingPhase::Loading => view! { <LoadingState /> }.into_any(),
                ListingPhase::Failed => view! {
                    <ErrorBanner message=messages::load_failed("blog posts") />
                }
                .into_any(),
                ListingPhase::Loaded => view! {
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <EmptyState message=messages::no_results("blog posts") />
                    </Show>
                    <div class=css::grid>
                        <For
                            each=move || visible.get()
                            key=|post| post.id.clone()
                            children=move |post| view! {
                                <BlogCard post=post on_open=open />
                            }
                        />
                    </div>
                }
                .into_any(),
            }}
            {move || selected.get().map(|post| view! {
                <BlogReader post=post on_close=close />
            })}
        </section>
    }
}
