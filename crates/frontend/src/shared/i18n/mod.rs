//! Two-language message catalog and locale switching.
//!
//! Same context shape as the theme module: a `Copy` context over one signal,
//! persisted in localStorage. Messages are plain static key/value tables so
//! lookup stays a string-keyed dispatch with no loader.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::icons::icon;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Locale {
    /// Spanish, the site default.
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "en" => Locale::En,
            _ => Locale::Es,
        }
    }

    /// Short code shown on the switcher button.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Es => "ES",
            Locale::En => "EN",
        }
    }

    /// Dropdown option label.
    pub fn option_label(&self) -> &'static str {
        match self {
            Locale::Es => "🇪🇸 Español",
            Locale::En => "🇺🇸 English",
        }
    }

    pub fn all() -> [Locale; 2] {
        [Locale::Es, Locale::En]
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::Es => ES_MESSAGES,
            Locale::En => EN_MESSAGES,
        }
    }
}

/// Look up a message; an unknown key renders as itself.
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
    locale
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

const LOCALE_STORAGE_KEY: &str = "portfolio-locale";

fn load_locale_from_storage() -> Locale {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
        .map(|s| Locale::from_str(&s))
        .unwrap_or_default()
}

fn save_locale_to_storage(locale: Locale) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
        save_locale_to_storage(locale);
    }

    /// Reactive message lookup for the current locale.
    pub fn t(&self, key: &'static str) -> &'static str {
        t(self.locale.get(), key)
    }
}

#[component]
pub fn LocaleProvider(children: Children) -> impl IntoView {
    let locale = RwSignal::new(load_locale_from_storage());

    provide_context(LocaleContext { locale });

    children()
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>()
        .expect("LocaleContext not found. Wrap your app with LocaleProvider.")
}

/// Locale dropdown: current code plus one option per language.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let ctx = use_locale();
    let (dropdown_open, set_dropdown_open) = signal(false);

    let select_locale = move |locale: Locale| {
        ctx.set_locale(locale);
        set_dropdown_open.set(false);
    };

    view! {
        <div class="language-switcher">
            <button
                class="language-switcher__button"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_dropdown_open.update(|open| *open = !*open);
                }
            >
                <span>{move || ctx.locale.get().code()}</span>
                {icon("chevron-down")}
            </button>

            <Show when=move || dropdown_open.get()>
                <div class="language-switcher__dropdown" on:click=move |ev| ev.stop_propagation()>
                    {Locale::all()
                        .into_iter()
                        .map(|locale| {
                            let is_active = move || ctx.locale.get() == locale;
                            view! {
                                <button
                                    class=move || {
                                        if is_active() {
                                            "language-switcher__option language-switcher__option--active"
                                        } else {
                                            "language-switcher__option"
                                        }
                                    }
                                    on:click=move |_| select_locale(locale)
                                >
                                    {locale.option_label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

static ES_MESSAGES: &[(&str, &str)] = &[
    ("hero.greeting", "Hola, soy"),
    ("hero.name", "Jair Benítez"),
    ("hero.role", "Desarrollador Full Stack"),
    (
        "hero.description",
        "Construyo aplicaciones web modernas, rápidas y a la medida: desde la idea hasta producción.",
    ),
    ("about.title", "Sobre mí"),
    ("about.subtitle", "Un poco de mi historia"),
    ("about.experienceTitle", "Experiencia"),
    (
        "about.bio",
        "Desarrollador autodidacta con experiencia construyendo sistemas a la medida para clientes reales: plataformas educativas, monitoreo clínico y automatización de procesos.",
    ),
    ("about.passionTitle", "Pasión"),
    (
        "about.passion",
        "Me apasiona resolver problemas reales con software bien hecho y aprender una tecnología nueva en cada proyecto.",
    ),
    ("about.motto", "\"El código limpio siempre paga la deuda.\""),
    ("about.stats.technologies", "Tecnologías"),
    ("about.stats.projects", "Proyectos"),
    ("about.stats.dedication", "Dedicación"),
    ("about.stats.availability", "Disponible"),
    ("stack.title", "Stack Tecnológico"),
    ("stack.subtitle", "Herramientas con las que trabajo a diario"),
    ("stack.category.frontend", "Frontend"),
    ("stack.category.backend", "Backend"),
    ("stack.category.database", "Bases de datos"),
    ("stack.category.cloud", "Cloud & Hosting"),
    ("stack.category.tools", "Herramientas"),
    ("projects.title", "Proyectos Destacados"),
    ("projects.subtitle", "Trabajo real para clientes reales"),
    (
        "projects.disclaimer",
        "Las capturas se muestran con autorización de cada cliente; algunos datos fueron anonimizados.",
    ),
    ("projects.empty", "Pronto habrá proyectos aquí."),
    ("projects.card.client", "Cliente"),
    ("projects.card.personal", "Proyecto personal"),
    ("projects.card.technologies", "Tecnologías"),
    ("projects.card.viewMore", "Click para ver más detalles →"),
    ("projects.modal.description", "Descripción"),
    ("projects.modal.gallery", "Galería"),
    ("projects.modal.galleryVideo", "Galería y Video"),
    (
        "projects.modal.videoUnsupported",
        "Tu navegador no soporta el elemento de video.",
    ),
    ("contact.title", "Contacto"),
    ("contact.subtitle", "¿Tienes un proyecto en mente? Hablemos."),
    ("contact.form.name", "Nombre"),
    ("contact.form.email", "Email"),
    ("contact.form.message", "Mensaje"),
    ("contact.form.send", "Enviar por WhatsApp"),
    ("contact.form.success", "¡Mensaje listo! Se abrió WhatsApp con tu mensaje."),
    ("contact.form.error", "No se pudo abrir WhatsApp. Intenta de nuevo."),
    (
        "contact.validation.name",
        "El nombre debe tener al menos 2 caracteres",
    ),
    ("contact.validation.email", "Email inválido"),
    (
        "contact.validation.message",
        "El mensaje debe tener al menos 10 caracteres",
    ),
    ("footer.rights", "Todos los derechos reservados"),
    ("footer.madeWith", "Hecho con"),
    ("footer.by", "por"),
    ("footer.builtWith", "Construido con Rust y Leptos"),
];

static EN_MESSAGES: &[(&str, &str)] = &[
    ("hero.greeting", "Hi, I'm"),
    ("hero.name", "Jair Benítez"),
    ("hero.role", "Full Stack Developer"),
    (
        "hero.description",
        "I build modern, fast, tailor-made web applications: from idea to production.",
    ),
    ("about.title", "About me"),
    ("about.subtitle", "A bit of my story"),
    ("about.experienceTitle", "Experience"),
    (
        "about.bio",
        "Self-taught developer with experience building tailor-made systems for real clients: education platforms, clinical monitoring and process automation.",
    ),
    ("about.passionTitle", "Passion"),
    (
        "about.passion",
        "I love solving real problems with well-crafted software and picking up a new technology with every project.",
    ),
    ("about.motto", "\"Clean code always pays its debt.\""),
    ("about.stats.technologies", "Technologies"),
    ("about.stats.projects", "Projects"),
    ("about.stats.dedication", "Dedication"),
    ("about.stats.availability", "Available"),
    ("stack.title", "Tech Stack"),
    ("stack.subtitle", "Tools I work with every day"),
    ("stack.category.frontend", "Frontend"),
    ("stack.category.backend", "Backend"),
    ("stack.category.database", "Databases"),
    ("stack.category.cloud", "Cloud & Hosting"),
    ("stack.category.tools", "Tools"),
    ("projects.title", "Featured Projects"),
    ("projects.subtitle", "Real work for real clients"),
    (
        "projects.disclaimer",
        "Screenshots are shown with each client's permission; some data has been anonymized.",
    ),
    ("projects.empty", "Projects coming soon."),
    ("projects.card.client", "Client"),
    ("projects.card.personal", "Personal project"),
    ("projects.card.technologies", "Technologies"),
    ("projects.card.viewMore", "Click for more details →"),
    ("projects.modal.description", "Description"),
    ("projects.modal.gallery", "Gallery"),
    ("projects.modal.galleryVideo", "Gallery & Video"),
    (
        "projects.modal.videoUnsupported",
        "Your browser does not support the video element.",
    ),
    ("contact.title", "Contact"),
    ("contact.subtitle", "Got a project in mind? Let's talk."),
    ("contact.form.name", "Name"),
    ("contact.form.email", "Email"),
    ("contact.form.message", "Message"),
    ("contact.form.send", "Send via WhatsApp"),
    ("contact.form.success", "Message ready! WhatsApp opened with your message."),
    ("contact.form.error", "Could not open WhatsApp. Please try again."),
    (
        "contact.validation.name",
        "Name must be at least 2 characters long",
    ),
    ("contact.validation.email", "Invalid email"),
    (
        "contact.validation.message",
        "Message must be at least 10 characters long",
    ),
    ("footer.rights", "All rights reserved"),
    ("footer.madeWith", "Made with"),
    ("footer.by", "by"),
    ("footer.builtWith", "Built with Rust & Leptos"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn both_catalogs_carry_the_same_keys() {
        let es: HashSet<_> = ES_MESSAGES.iter().map(|(k, _)| *k).collect();
        let en: HashSet<_> = EN_MESSAGES.iter().map(|(k, _)| *k).collect();
        let missing_en: Vec<_> = es.difference(&en).collect();
        let missing_es: Vec<_> = en.difference(&es).collect();
        assert!(missing_en.is_empty(), "missing in EN: {missing_en:?}");
        assert!(missing_es.is_empty(), "missing in ES: {missing_es:?}");
    }

    #[test]
    fn no_duplicate_keys_within_a_catalog() {
        for table in [ES_MESSAGES, EN_MESSAGES] {
            let unique: HashSet<_> = table.iter().map(|(k, _)| *k).collect();
            assert_eq!(unique.len(), table.len());
        }
    }

    #[test]
    fn lookup_translates_per_locale() {
        assert_eq!(t(Locale::Es, "projects.card.client"), "Cliente");
        assert_eq!(t(Locale::En, "projects.card.client"), "Client");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(t(Locale::Es, "nope.missing"), "nope.missing");
    }

    #[test]
    fn storage_string_round_trips() {
        assert_eq!(Locale::from_str(Locale::Es.as_str()), Locale::Es);
        assert_eq!(Locale::from_str(Locale::En.as_str()), Locale::En);
        assert_eq!(Locale::from_str("de"), Locale::Es);
    }
}
