use contracts::data::CONTACT_INFO;
use contracts::domain::contact::ContactInfo;
use leptos::prelude::*;

use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    message: String,
}

/// Per-field message keys; `None` means the field is fine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct FieldErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    message: Option<&'static str>,
}

impl FieldErrors {
    fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if form.name.trim().chars().count() < 2 {
        errors.name = Some("contact.validation.name");
    }
    if !is_valid_email(form.email.trim()) {
        errors.email = Some("contact.validation.email");
    }
    if form.message.trim().chars().count() < 10 {
        errors.message = Some("contact.validation.message");
    }
    errors
}

/// Syntactic check only; delivery happens through WhatsApp, so the email is
/// just contact info inside the message.
fn is_valid_email(s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Prefilled-message deep link, the original site's delivery channel.
fn whatsapp_message_url(info: &ContactInfo, form: &ContactForm) -> String {
    let body = format!(
        "*Mensaje desde portafolio web*\n\n*Nombre:* {}\n*Email:* {}\n*Mensaje:*\n{}",
        form.name, form.email, form.message
    );
    format!(
        "https://wa.me/{}?text={}",
        info.whatsapp_digits(),
        urlencoding::encode(&body)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SubmitStatus {
    #[default]
    Idle,
    Sent,
    Failed,
}

#[component]
pub fn Contact() -> impl IntoView {
    let i18n = use_locale();
    let info = &*CONTACT_INFO;

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(SubmitStatus::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let validation = validate(&form);
        errors.set(validation);
        if !validation.is_clean() {
            status.set(SubmitStatus::Idle);
            return;
        }

        let url = whatsapp_message_url(&CONTACT_INFO, &form);
        log::debug!("contact form: opening whatsapp");
        let opened = web_sys::window()
            .and_then(|w| w.open_with_url_and_target(&url, "_blank").ok().flatten());
        match opened {
            Some(_) => {
                status.set(SubmitStatus::Sent);
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            None => status.set(SubmitStatus::Failed),
        }
    };

    let field_error = move |key: Option<&'static str>| {
        key.map(|key| view! { <p class="form-error">{move || i18n.t(key)}</p> })
    };

    view! {
        <section id="contact" class="section section--contact">
            <div class="section-heading">
                <h2 class="section-title">{move || i18n.t("contact.title")}</h2>
                <p class="section-subtitle">{move || i18n.t("contact.subtitle")}</p>
            </div>
            <div class="contact-layout">
                <div class="contact-channels">
                    <a class="contact-channel" href=info.mailto_link()>
                        {icon("mail")}
                        <span>{info.email.clone()}</span>
                    </a>
                    <a
                        class="contact-channel"
                        href=info.whatsapp_link()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {icon("whatsapp")}
                        <span>{info.whatsapp.clone()}</span>
                    </a>
                </div>
                <form class="contact-form" on:submit=submit>
                    <div class="form-group">
                        <label class="form-label" for="contact-name">
                            {move || i18n.t("contact.form.name")}
                        </label>
                        <input
                            id="contact-name"
                            class="form-input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        {move || field_error(errors.get().name)}
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="contact-email">
                            {move || i18n.t("contact.form.email")}
                        </label>
                        <input
                            id="contact-email"
                            class="form-input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        {move || field_error(errors.get().email)}
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="contact-message">
                            {move || i18n.t("contact.form.message")}
                        </label>
                        <textarea
                            id="contact-message"
                            class="form-input form-input--textarea"
                            rows="5"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                        {move || field_error(errors.get().message)}
                    </div>
                    <button class="form-submit" type="submit">
                        {move || i18n.t("contact.form.send")}
                    </button>
                    {move || match status.get() {
                        SubmitStatus::Idle => None,
                        SubmitStatus::Sent => Some(
                            view! {
                                <p class="form-status form-status--success">
                                    {move || i18n.t("contact.form.success")}
                                </p>
                            }
                            .into_any(),
                        ),
                        SubmitStatus::Failed => Some(
                            view! {
                                <p class="form-status form-status--error">
                                    {move || i18n.t("contact.form.error")}
                                </p>
                            }
                            .into_any(),
                        ),
                    }}
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        let errors = validate(&form("Ana", "ana@example.com", "Hola, quiero una cotización."));
        assert!(errors.is_clean());
    }

    #[test]
    fn short_name_and_message_are_rejected() {
        let errors = validate(&form("A", "ana@example.com", "corto"));
        assert_eq!(errors.name, Some("contact.validation.name"));
        assert_eq!(errors.message, Some("contact.validation.message"));
        assert!(errors.email.is_none());
    }

    #[test]
    fn whitespace_does_not_count_toward_minimums() {
        let errors = validate(&form("  A  ", "ana@example.com", "   hola    "));
        assert_eq!(errors.name, Some("contact.validation.name"));
        assert_eq!(errors.message, Some("contact.validation.message"));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("dev@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("dev@nodot"));
        assert!(!is_valid_email("dev@.example.com"));
        assert!(!is_valid_email("dev@example.com."));
        assert!(!is_valid_email("de v@example.com"));
    }

    #[test]
    fn whatsapp_url_encodes_the_message() {
        let info = ContactInfo {
            email: "dev@example.com".to_string(),
            whatsapp: "+57 313 5399868".to_string(),
            github: None,
            linkedin: None,
            twitter: None,
            instagram: None,
        };
        let url = whatsapp_message_url(&info, &form("Ana María", "ana@example.com", "Hola!"));
        assert!(url.starts_with("https://wa.me/573135399868?text="));
        assert!(url.contains("Ana%20Mar%C3%ADa"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }
}
