use contracts::data::CONTACT_INFO;
use leptos::prelude::*;

use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;
use crate::ui::astronaut::Astronaut;

struct Particle {
    left: f64,
    top: f64,
    duration: f64,
    delay: f64,
}

fn particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left: js_sys::Math::random() * 100.0,
            top: js_sys::Math::random() * 100.0,
            duration: 3.0 + js_sys::Math::random() * 2.0,
            delay: js_sys::Math::random() * 2.0,
        })
        .collect()
}

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_locale();
    let info = &*CONTACT_INFO;

    let social_links: Vec<(&'static str, String)> = [
        ("github", info.github.clone()),
        ("linkedin", info.linkedin.clone()),
        ("whatsapp", Some(info.whatsapp_link())),
        ("instagram", info.instagram.clone()),
        ("mail", Some(info.mailto_link())),
    ]
    .into_iter()
    .filter_map(|(name, href)| href.map(|href| (name, href)))
    .collect();

    view! {
        <section id="hero" class="section section--hero">
            <div class="hero-particles">
                {particles(20)
                    .into_iter()
                    .map(|p| {
                        let style = format!(
                            "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                            p.left, p.top, p.duration, p.delay
                        );
                        view! { <span class="hero-particle" style=style></span> }
                    })
                    .collect_view()}
            </div>
            <Astronaut />
            <div class="hero-content">
                <span class="hero-greeting">{move || i18n.t("hero.greeting")}</span>
                <h1 class="hero-name">{move || i18n.t("hero.name")}</h1>
                <h2 class="hero-role">{move || i18n.t("hero.role")}</h2>
                <p class="hero-description">{move || i18n.t("hero.description")}</p>
                <div class="hero-social">
                    {social_links
                        .into_iter()
                        .map(|(name, href)| {
                            let external = !href.starts_with("mailto:");
                            view! {
                                <a
                                    class="hero-social__link"
                                    href=href
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    aria-label=name
                                >
                                    {icon(name)}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
