//! Projects listing page.
//!
//! Search covers title, description, and the tech stack list, so typing
//! "rust" finds every project tagged with it regardless of title.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::listing::{EmptyState, ErrorBanner, LoadingState, SearchBox};
use crate::components::modal::Modal;
use crate::config::{endpoints, messages};
use crate::core::{use_listing, ListingController, ListingPhase};
use crate::models::Project;

stylance::import_crate_style!(css, "src/components/projects/projects.module.css");

#[component]
fn TechChips(stack: Vec<String>) -> impl IntoView {
    view! {
        <ul class=css::chips>
            {stack
                .into_iter()
                .map(|tech| view! { <li class=css::chip>{tech}</li> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn ProjectCard(project: Project, on_open: Callback<String>) -> impl IntoView {
    let id = project.id.clone();
    view! {
        <article class=css::card on:click=move |_| on_open.run(id.clone())>
            {project.image_url.clone().map(|url| view! {
                <img class=css::cardImage src=url alt=project.title.clone() />
            })}
            <h3 class=css::cardTitle>{project.title.clone()}</h3>
            <p class=css::cardDescription>{project.description.clone()}</p>
            <TechChips stack=project.tech_stack.clone() />
        </article>
    }
}

#[component]
fn ProjectDetail(project: Project, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal on_close=on_close>
            <div class=css::detail>
                {project.image_url.clone().map(|url| view! {
                    <img class=css::detailImage src=url alt=project.title.clone() />
                })}
                <h2>{project.title.clone()}</h2>
                <p class=css::detailDescription>{project.description.clone()}</p>
                <TechChips stack=project.tech_stack.clone() />
                <div class=css::detailLinks>
                    {project.github.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener" class=css::detailLink>
                            <Icon icon=ic::GITHUB />
                            " Repository"
                        </a>
                    })}
                    {project.linkedin.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener" class=css::detailLink>
                            <Icon icon=ic::LINKEDIN />
                            " Write-up"
                        </a>
                    })}
                </div>
            </div>
        </Modal>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctrl: ListingController<Project> = use_listing(endpoints::PROJECTS);
    let selected = RwSignal::new(None::<Project>);
    let visible = Signal::derive(move || ctrl.visible());

    let open = Callback::new(move |id: String| {
        if let Some(project) = ctrl.find(&id) {
            selected.set(Some(project));
        }
    });
    let close = Callback::new(move |_| selected.set(None));

    view! {
        <section class=css::page>
            <h1 class=css::heading>"Projects"</h1>
            <SearchBox query=ctrl.query placeholder="Search projects by title or tech..." />
            {move || match ctrl.phase.get() {
                ListingPhase::Loading => view! { <LoadingState /> }.into_any(),
                ListingPhase::Failed => view! {
                    <ErrorBanner message=messages::load_failed("projects") />
                }
                .into_any(),
                ListingPhase::Loaded => view! {
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <EmptyState message=messages::no_results("projects") />
                    </Show>
                    <div class=css::grid>
                        <For
                            each=move || visible.get()
                            key=|project| project.id.clone()
                            children=move |project| view! {
                                <ProjectCard project=project on_open=open />
                            }
                        />
                    </div>
                }
                .into_any(),
            }}
            {move || selected.get().map(|project| view! {
                <ProjectDetail project=project on_close=close />
            })}
        </section>
    }
}
