use contracts::data::PROJECTS;
use contracts::domain::project::Project;
use leptos::prelude::*;

use crate::shared::i18n::use_locale;
use crate::ui::project_modal::use_project_modal;

/// Tags shown on a card before the "+N" overflow chip.
const CARD_TAG_LIMIT: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
    let i18n = use_locale();
    let projects: Vec<Project> = PROJECTS.clone();

    view! {
        <section id="projects" class="section section--projects">
            <div class="section-heading">
                <h2 class="section-title">{move || i18n.t("projects.title")}</h2>
                <p class="section-subtitle">{move || i18n.t("projects.subtitle")}</p>
                <p class="projects-disclaimer">{move || i18n.t("projects.disclaimer")}</p>
            </div>
            {if projects.is_empty() {
                view! { <p class="projects-empty">{move || i18n.t("projects.empty")}</p> }
                    .into_any()
            } else {
                view! {
                    <div class="projects-strip">
                        {projects
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=project /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let modal = use_project_modal();
    let i18n = use_locale();

    let thumbnail = project.image.clone();
    let title = project.title.clone();
    let description = project.description.clone();
    let visible_tags: Vec<String> = project
        .technologies
        .iter()
        .take(CARD_TAG_LIMIT)
        .cloned()
        .collect();
    let overflow = project.technologies.len().saturating_sub(CARD_TAG_LIMIT);

    let for_open = project.clone();
    let client_line = move || {
        format!(
            "{}: {}",
            i18n.t("projects.card.client"),
            project.client_or(i18n.t("projects.card.personal"))
        )
    };

    view! {
        <div class="project-card" on:click=move |_| modal.open(for_open.clone())>
            <div class="project-card__image">
                <img src=thumbnail alt=title.clone() loading="lazy" />
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{title}</h3>
                <p class="project-card__description">{description}</p>
                <div class="project-card__client">{client_line}</div>
                <div class="project-card__tech">
                    <div class="project-card__tech-label">
                        {move || i18n.t("projects.card.technologies")}
                        ":"
                    </div>
                    <div class="tag-list">
                        {visible_tags
                            .into_iter()
                            .map(|tech| view! { <span class="tag tag--small">{tech}</span> })
                            .collect_view()}
                        {(overflow > 0).then(|| view! {
                            <span class="tag tag--small">{format!("+{overflow}")}</span>
                        })}
                    </div>
                </div>
                <div class="project-card__view-more">{move || i18n.t("projects.card.viewMore")}</div>
            </div>
        </div>
    }
}
