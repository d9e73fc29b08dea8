//! Project detail modal: overlay lifecycle, gallery strip, and the
//! fullscreen image viewer.

pub mod state;

use contracts::domain::project::Project;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;
pub use state::CLOSE_CLEAR_DELAY_MS;
use state::ModalState;

/// Context service owning the modal state.
///
/// `close()` hides the modal at once and schedules the deferred selection
/// clear; an `open()` before the timer fires makes the pending clear stale.
#[derive(Clone, Copy)]
pub struct ProjectModalController {
    state: RwSignal<ModalState>,
}

impl ProjectModalController {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ModalState::default()),
        }
    }

    pub fn open(&self, project: Project) {
        log::debug!("project modal: open {}", project.id);
        self.state.update(|s| s.open(project));
    }

    pub fn close(&self) {
        log::debug!("project modal: close");
        let Some(token) = self.state.try_update(|s| s.request_close()) else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            TimeoutFuture::new(CLOSE_CLEAR_DELAY_MS).await;
            // A reopen in the meantime made the token stale; clear_selected
            // ignores it then.
            _ = state.try_update(|s| s.clear_selected(token));
        });
    }

    fn handle_escape(&self) {
        if self.state.with_untracked(|s| s.viewer().is_active()) {
            self.state.update(|s| s.close_image());
        } else if self.state.with_untracked(|s| s.is_open()) {
            self.close();
        }
    }
}

impl Default for ProjectModalController {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_project_modal() -> ProjectModalController {
    use_context::<ProjectModalController>()
        .expect("ProjectModalController not provided in context")
}

/// Modal host. Renders nothing while no project is selected.
#[component]
pub fn ProjectModal() -> impl IntoView {
    let modal = use_project_modal();
    let state = modal.state;

    // Escape closes the viewer first, then the modal.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    modal.handle_escape();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    // Block background scroll while the modal is up.
    Effect::new(move |_| {
        let open = state.with(|s| s.is_open());
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            if open {
                let _ = body.set_attribute("data-modal-open", "true");
            } else {
                let _ = body.remove_attribute("data-modal-open");
            }
        }
    });

    // The surface re-renders only when the selection changes; visibility and
    // viewer navigation toggle classes and subtrees below it.
    let selected = Memo::new(move |_| state.with(|s| s.selected().cloned()));

    view! {
        {move || selected.get().map(|project| view! { <ModalSurface project=project /> })}
    }
}

#[component]
fn ModalSurface(project: Project) -> impl IntoView {
    let modal = use_project_modal();
    let state = modal.state;
    let i18n = use_locale();

    let overlay_class = move || {
        if state.with(|s| s.is_open()) {
            "modal-overlay modal-overlay--open"
        } else {
            "modal-overlay modal-overlay--closing"
        }
    };

    let title = project.title.clone();
    let client = project.client.clone();
    let full_description = project.full_description.clone();
    let technologies = project.technologies.clone();
    let gallery_heading_key = if project.video.is_some() {
        "projects.modal.galleryVideo"
    } else {
        "projects.modal.gallery"
    };
    let has_gallery = project.has_gallery();

    view! {
        <div class=overlay_class on:click=move |_| modal.close()>
            <div class="modal-panel" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="modal-close" aria-label="Close" on:click=move |_| modal.close()>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {client.map(|client| view! {
                        <p class="modal-client">
                            {move || i18n.t("projects.card.client")}
                            ": "
                            {client}
                        </p>
                    })}
                    {full_description.map(|text| view! {
                        <div class="modal-section">
                            <h3 class="modal-section__title">
                                {move || i18n.t("projects.modal.description")}
                            </h3>
                            <p class="modal-description">{text}</p>
                        </div>
                    })}
                    <div class="modal-section">
                        <h3 class="modal-section__title">
                            {move || i18n.t("projects.card.technologies")}
                        </h3>
                        <div class="tag-list">
                            {technologies
                                .into_iter()
                                .map(|tech| view! { <span class="tag">{tech}</span> })
                                .collect_view()}
                        </div>
                    </div>
                    {has_gallery.then(|| view! {
                        <GalleryStrip project=project.clone() heading_key=gallery_heading_key />
                    })}
                </div>
            </div>
        </div>
        <FullscreenOverlay project=project />
    }
}

/// Horizontally scrollable, snap-aligned strip: ordered images, then the
/// trailing video when the project has one.
#[component]
fn GalleryStrip(project: Project, heading_key: &'static str) -> impl IntoView {
    let modal = use_project_modal();
    let state = modal.state;
    let i18n = use_locale();

    let title = project.title.clone();
    let video_view = project.video.clone().map(|src| view! {
        <div class="gallery-item gallery-item--video">
            <video controls preload="metadata">
                <source src=src type="video/mp4" />
                {move || i18n.t("projects.modal.videoUnsupported")}
            </video>
        </div>
    });

    view! {
        <div class="modal-section">
            <h3 class="modal-section__title">{move || i18n.t(heading_key)}</h3>
            <div class="gallery-strip">
                {project
                    .images
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(i, src)| {
                        let alt = format!("{title} - {}", i + 1);
                        view! {
                            <div class="gallery-item" on:click=move |_| state.update(|s| s.open_image(i))>
                                <img src=src alt=alt loading="lazy" />
                                <div class="gallery-item__zoom">{icon("zoom-in")}</div>
                            </div>
                        }
                    })
                    .collect_view()}
                {video_view}
            </div>
        </div>
    }
}

#[component]
fn FullscreenOverlay(project: Project) -> impl IntoView {
    let modal = use_project_modal();
    let state = modal.state;

    let images = StoredValue::new(project.images.clone());
    let title = StoredValue::new(project.title.clone());
    // Previous/next only exist with something to navigate to.
    let many = project.images.len() > 1;

    let current_src = move || {
        state
            .with(|s| s.viewer().index())
            .and_then(|i| images.with_value(|imgs| imgs.get(i).cloned()))
            .unwrap_or_default()
    };
    let counter = move || state.with(|s| s.image_counter()).unwrap_or_default();
    let alt = move || format!("{} - {}", title.get_value(), counter());

    view! {
        <Show when=move || state.with(|s| s.viewer().is_active())>
            <div class="fullscreen-backdrop" on:click=move |_| state.update(|s| s.close_image())></div>
            <div class="fullscreen-viewer">
                <button
                    class="fullscreen-button fullscreen-button--close"
                    aria-label="Close image"
                    on:click=move |_| state.update(|s| s.close_image())
                >
                    {icon("x")}
                </button>
                <Show when=move || many>
                    <button
                        class="fullscreen-button fullscreen-button--previous"
                        aria-label="Previous image"
                        on:click=move |_| state.update(|s| s.previous_image())
                    >
                        {icon("chevron-left")}
                    </button>
                    <button
                        class="fullscreen-button fullscreen-button--next"
                        aria-label="Next image"
                        on:click=move |_| state.update(|s| s.next_image())
                    >
                        {icon("chevron-right")}
                    </button>
                </Show>
                <div class="fullscreen-counter">{counter}</div>
                <img class="fullscreen-image" src=current_src alt=alt />
            </div>
        </Show>
    }
}
