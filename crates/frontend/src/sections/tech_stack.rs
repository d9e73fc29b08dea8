use contracts::data::TECH_STACK;
use contracts::domain::tech::TechCategory;
use leptos::prelude::*;

use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;

#[component]
pub fn TechStack() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section id="stack" class="section section--stack">
            <div class="section-heading">
                <h2 class="section-title">{move || i18n.t("stack.title")}</h2>
                <p class="section-subtitle">{move || i18n.t("stack.subtitle")}</p>
            </div>
            {TechCategory::all()
                .into_iter()
                .map(|category| {
                    let items: Vec<_> = TECH_STACK
                        .iter()
                        .filter(|item| item.category == category)
                        .cloned()
                        .collect();
                    let label_key = category.label_key();
                    view! {
                        <div class="stack-category">
                            <h3 class="stack-category__title">{move || i18n.t(label_key)}</h3>
                            <div class="stack-grid">
                                {items
                                    .into_iter()
                                    .map(|item| view! {
                                        <div class="stack-item">
                                            <span class="stack-item__icon">{icon(&item.icon)}</span>
                                            <span class="stack-item__name">{item.name}</span>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
