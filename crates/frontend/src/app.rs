use leptos::prelude::*;

use crate::sections::about::About;
use crate::sections::contact::Contact;
use crate::sections::hero::Hero;
use crate::sections::projects::Projects;
use crate::sections::tech_stack::TechStack;
use crate::shared::i18n::{LanguageSwitcher, LocaleProvider};
use crate::shared::theme::{ThemeProvider, ThemeToggle};
use crate::ui::footer::Footer;
use crate::ui::project_modal::{ProjectModal, ProjectModalController};

#[component]
pub fn App() -> impl IntoView {
    // Provide the modal controller to the whole app via context.
    provide_context(ProjectModalController::new());

    view! {
        <ThemeProvider>
            <LocaleProvider>
                <div class="page-controls">
                    <LanguageSwitcher />
                    <ThemeToggle />
                </div>
                <main>
                    <Hero />
                    <About />
                    <TechStack />
                    <Projects />
                    <Contact />
                </main>
                <Footer />
                <ProjectModal />
            </LocaleProvider>
        </ThemeProvider>
    }
}
