//! Members listing page.
//!
//! Search covers name, role, and email. Members have no category, so the
//! page has no tab row. Cards fall back to an initials avatar when no photo
//! was uploaded.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::listing::{EmptyState, ErrorBanner, LoadingState, SearchBox};
use crate::components::modal::Modal;
use crate::config::{endpoints, messages};
use crate::core::{use_listing, ListingController, ListingPhase};
use crate::models::Member;
use crate::utils::format;

stylance::import_crate_style!(css, "src/components/members/members.module.css");

#[component]
fn Avatar(member: Member) -> impl IntoView {
    match member.photo_url {
        Some(url) => view! { <img class=css::avatar src=url alt=member.name /> }.into_any(),
        None => view! {
            <div class=css::avatarFallback>{format::initials(&member.name)}</div>
        }
        .into_any(),
    }
}

#[component]
fn MemberCard(member: Member, on_open: Callback<String>) -> impl IntoView {
    let id = member.id.clone();
    view! {
        <article class=css::card on:click=move |_| on_open.run(id.clone())>
            <Avatar member=member.clone() />
            <h3 class=css::cardName>{member.name.clone()}</h3>
            <p class=css::cardRole>{member.role.clone()}</p>
        </article>
    }
}

#[component]
fn MemberDetail(member: Member, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal on_close=on_close>
            <div class=css::detail>
                <Avatar member=member.clone() />
                <h2>{member.name.clone()}</h2>
                <p class=css::detailRole>{member.role.clone()}</p>
                <div class=css::detailLinks>
                    {member.email.clone().map(|email| view! {
                        <a href=format!("mailto:{}", email) class=css::detailLink>
                            <Icon icon=ic::ENVELOPE />
                            " Email"
                        </a>
                    })}
                    {member.github.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener" class=css::detailLink>
                            <Icon icon=ic::GITHUB />
                            " GitHub"
                        </a>
                    })}
                    {member.linkedin.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener" class=css::detailLink>
                            <Icon icon=ic::LINKEDIN />
                            " LinkedIn"
                        </a>
                    })}
                    {member.resume_url.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener" class=css::detailLink>
                            <Icon icon=ic::DOWNLOAD />
                            " Resume"
                        </a>
                    })}
                </div>
            </div>
        </Modal>
    }
}

#[component]
pub fn MembersPage() -> impl IntoView {
    let ctrl: ListingController<Member> = use_listing(endpoints::MEMBERS);
    let selected = RwSignal::new(None::<Member>);
    let visible = Signal::derive(move || ctrl.visible());

    // Detail lookup goes through the cache; a stale id just logs and
    // no modal opens.
    let open = Callback::new(move |id: String| {
        if let Some(member) = ctrl.find(&id) {
            selected.set(Some(member));
        }
    });
    let close = Callback::new(move |_| selected.set(None));

    view! {
        <section class=css::page>
            <h1 class=css::heading>"Our Team"</h1>
            <SearchBox query=ctrl.query placeholder="Search members by name, role, or email..." />
            {move || match ctrl.phase.get() {
                ListingPhase::Loading => view! { <LoadingState /> }.into_any(),
                ListingPhase::Failed => view! {
                    <ErrorBanner message=messages::load_failed("members") />
                }
                .into_any(),
                ListingPhase::Loaded => view! {
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <EmptyState message=messages::no_results("members") />
                    </Show>
                    <div class=css::grid>
                        <For
                            each=move || visible.get()
                            key=|member| member.id.clone()
                            children=move |member| view! {
                                <MemberCard member=member on_open=open />
                            }
                        />
                    </div>
                }
                .into_any(),
            }}
            {move || selected.get().map(|member| view! {
                <MemberDetail member=member on_close=close />
            })}
        </section>
    }
}
