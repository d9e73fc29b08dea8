use leptos::prelude::*;

use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_locale();
    let current_year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__copyright">
                    {format!("© {current_year} Jair Benítez. ")}
                    {move || i18n.t("footer.rights")}
                    "."
                </div>
                <div class="footer__made-with">
                    <span>{move || i18n.t("footer.madeWith")}</span>
                    <span class="footer__heart">{icon("heart")}</span>
                    <span>{move || i18n.t("footer.by")}</span>
                    <span>" Jair"</span>
                </div>
                <div class="footer__built-with">{move || i18n.t("footer.builtWith")}</div>
            </div>
        </footer>
    }
}
