use leptos::prelude::*;

use crate::shared::i18n::use_locale;

/// Highlight figures under the bio cards. The numbers are content, not data;
/// labels come from the catalog.
const STATS: [(&str, &str); 4] = [
    ("10+", "about.stats.technologies"),
    ("7+", "about.stats.projects"),
    ("100%", "about.stats.dedication"),
    ("24/7", "about.stats.availability"),
];

#[component]
pub fn About() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section id="about" class="section section--about">
            <div class="section-heading">
                <h2 class="section-title">{move || i18n.t("about.title")}</h2>
                <p class="section-subtitle">{move || i18n.t("about.subtitle")}</p>
            </div>
            <div class="about-cards">
                <div class="about-card">
                    <h3 class="about-card__title">{move || i18n.t("about.experienceTitle")}</h3>
                    <p class="about-card__text">{move || i18n.t("about.bio")}</p>
                </div>
                <div class="about-card">
                    <h3 class="about-card__title">{move || i18n.t("about.passionTitle")}</h3>
                    <p class="about-card__text">{move || i18n.t("about.passion")}</p>
                    <p class="about-card__motto">{move || i18n.t("about.motto")}</p>
                </div>
            </div>
            <div class="about-stats">
                {STATS
                    .into_iter()
                    .map(|(number, label_key)| view! {
                        <div class="about-stat">
                            <div class="about-stat__number">{number}</div>
                            <div class="about-stat__label">{move || i18n.t(label_key)}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
