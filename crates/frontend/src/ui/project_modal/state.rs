//! Transition logic for the project modal and its fullscreen image viewer.
//!
//! Plain structs with no UI types so every transition is unit-testable off
//! the browser. The component layer in `mod.rs` wraps this in a signal.

use contracts::domain::project::Project;

/// How long the modal exit animation runs before the selected project may be
/// dropped. Must stay in sync with the `modal-leave` duration in
/// `static/styles.css`; nothing enforces that coupling.
pub const CLOSE_CLEAR_DELAY_MS: u32 = 300;

/// Fullscreen viewer position inside the open modal.
///
/// `None` is inactive, `Some(i)` shows image `i`. Navigation wraps with
/// modular arithmetic rather than clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullscreenViewer {
    index: Option<usize>,
}

impl FullscreenViewer {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.index.is_some()
    }

    /// Activate at image `i`. Out-of-range indices are ignored.
    pub fn open_at(&mut self, i: usize, len: usize) {
        if i < len {
            self.index = Some(i);
        }
    }

    pub fn next(&mut self, len: usize) {
        if let Some(i) = self.index {
            if len > 0 {
                self.index = Some((i + 1) % len);
            }
        }
    }

    pub fn previous(&mut self, len: usize) {
        if let Some(i) = self.index {
            if len > 0 {
                self.index = Some((i + len - 1) % len);
            }
        }
    }

    pub fn close(&mut self) {
        self.index = None;
    }

    /// 1-based "current / total" label shown above the image.
    pub fn counter(&self, len: usize) -> Option<String> {
        self.index.map(|i| format!("{} / {}", i + 1, len))
    }
}

/// Modal lifecycle. `selected` outlives `is_open == false` for
/// [`CLOSE_CLEAR_DELAY_MS`] so the exit animation still has content; the
/// epoch lets a reopen supersede a clear that is still pending.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    selected: Option<Project>,
    is_open: bool,
    viewer: FullscreenViewer,
    epoch: u64,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn viewer(&self) -> FullscreenViewer {
        self.viewer
    }

    fn image_count(&self) -> usize {
        self.selected.as_ref().map_or(0, |p| p.images.len())
    }

    /// Select a project and show the modal. Valid from any prior state;
    /// supersedes a clear pending from an earlier close.
    pub fn open(&mut self, project: Project) {
        self.epoch += 1;
        self.viewer.close();
        self.selected = Some(project);
        self.is_open = true;
    }

    /// Hide the modal immediately and hand back a token for the deferred
    /// clear. The viewer resets with the modal.
    pub fn request_close(&mut self) -> u64 {
        self.is_open = false;
        self.viewer.close();
        self.epoch += 1;
        self.epoch
    }

    /// Drop the selected project once the exit animation is over. A token
    /// from a close that was since superseded does nothing.
    pub fn clear_selected(&mut self, token: u64) {
        if token == self.epoch && !self.is_open {
            self.selected = None;
        }
    }

    pub fn open_image(&mut self, i: usize) {
        if self.is_open {
            let len = self.image_count();
            self.viewer.open_at(i, len);
        }
    }

    pub fn next_image(&mut self) {
        let len = self.image_count();
        self.viewer.next(len);
    }

    pub fn previous_image(&mut self) {
        let len = self.image_count();
        self.viewer.previous(len);
    }

    pub fn close_image(&mut self) {
        self.viewer.close();
    }

    pub fn image_counter(&self) -> Option<String> {
        self.viewer.counter(self.image_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::project::ProjectCategory;

    fn project(id: &str, images: &[&str], video: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            image: "/thumb.png".to_string(),
            technologies: vec![],
            demo_url: None,
            github_url: None,
            client: None,
            category: ProjectCategory::All,
            full_description: None,
            images: images.iter().map(|s| s.to_string()).collect(),
            video: video.map(|s| s.to_string()),
        }
    }

    #[test]
    fn next_and_previous_wrap_for_all_sizes() {
        for n in 2..=5 {
            for i in 0..n {
                let mut viewer = FullscreenViewer::default();
                viewer.open_at(i, n);
                viewer.next(n);
                assert_eq!(viewer.index(), Some((i + 1) % n), "next from {i} of {n}");

                let mut viewer = FullscreenViewer::default();
                viewer.open_at(i, n);
                viewer.previous(n);
                assert_eq!(
                    viewer.index(),
                    Some((i + n - 1) % n),
                    "previous from {i} of {n}"
                );
            }
        }
    }

    #[test]
    fn wraparound_at_both_ends_is_modular_not_clamped() {
        let mut viewer = FullscreenViewer::default();
        viewer.open_at(4, 5);
        viewer.next(5);
        assert_eq!(viewer.index(), Some(0));

        viewer.open_at(0, 5);
        viewer.previous(5);
        assert_eq!(viewer.index(), Some(4));
    }

    #[test]
    fn open_at_rejects_out_of_range() {
        let mut viewer = FullscreenViewer::default();
        viewer.open_at(3, 3);
        assert!(!viewer.is_active());
        viewer.open_at(0, 0);
        assert!(!viewer.is_active());
        viewer.open_at(2, 3);
        assert_eq!(viewer.index(), Some(2));
    }

    #[test]
    fn navigation_while_inactive_is_a_no_op() {
        let mut viewer = FullscreenViewer::default();
        viewer.next(4);
        viewer.previous(4);
        assert!(!viewer.is_active());
        assert_eq!(viewer.counter(4), None);
    }

    #[test]
    fn open_sets_selection_and_visibility_from_any_state() {
        let mut state = ModalState::default();
        state.open(project("a", &[], None));
        assert!(state.is_open());
        assert_eq!(state.selected().unwrap().id, "a");

        // reopen directly with another project
        state.open(project("b", &[], None));
        assert!(state.is_open());
        assert_eq!(state.selected().unwrap().id, "b");
    }

    #[test]
    fn close_hides_immediately_but_keeps_selection_until_cleared() {
        let mut state = ModalState::default();
        state.open(project("a", &[], None));
        let token = state.request_close();
        assert!(!state.is_open());
        assert!(state.selected().is_some());

        state.clear_selected(token);
        assert!(state.selected().is_none());
    }

    #[test]
    fn reopen_supersedes_a_pending_clear() {
        let mut state = ModalState::default();
        state.open(project("a", &[], None));
        let stale = state.request_close();

        // user reopens before the delayed clear fires
        state.open(project("b", &[], None));
        state.clear_selected(stale);

        assert!(state.is_open());
        assert_eq!(state.selected().unwrap().id, "b");
    }

    #[test]
    fn only_the_latest_close_token_clears() {
        let mut state = ModalState::default();
        state.open(project("a", &[], None));
        let first = state.request_close();
        state.open(project("a", &[], None));
        let second = state.request_close();
        assert_ne!(first, second);

        state.clear_selected(first);
        assert!(state.selected().is_some());
        state.clear_selected(second);
        assert!(state.selected().is_none());
    }

    #[test]
    fn selection_never_drops_while_open() {
        let mut state = ModalState::default();
        state.open(project("a", &[], None));
        for token in 0..8 {
            state.clear_selected(token);
        }
        assert!(state.is_open());
        assert!(state.selected().is_some());
    }

    #[test]
    fn closing_the_modal_resets_the_viewer() {
        let mut state = ModalState::default();
        state.open(project("a", &["/1.png", "/2.png"], None));
        state.open_image(1);
        assert_eq!(state.viewer().index(), Some(1));

        state.request_close();
        assert!(!state.viewer().is_active());
    }

    #[test]
    fn reopening_starts_with_an_inactive_viewer() {
        let mut state = ModalState::default();
        state.open(project("a", &["/1.png", "/2.png"], None));
        state.open_image(0);
        state.open(project("b", &["/1.png"], None));
        assert!(!state.viewer().is_active());
    }

    #[test]
    fn counter_walk_over_three_images() {
        let mut state = ModalState::default();
        state.open(project("a", &["/a.png", "/b.png", "/c.png"], None));

        state.open_image(0);
        assert_eq!(state.image_counter().as_deref(), Some("1 / 3"));

        state.previous_image();
        assert_eq!(state.viewer().index(), Some(2));
        assert_eq!(state.image_counter().as_deref(), Some("3 / 3"));

        state.next_image();
        state.next_image();
        assert_eq!(state.viewer().index(), Some(1));
        assert_eq!(state.image_counter().as_deref(), Some("2 / 3"));
    }

    #[test]
    fn video_only_project_never_reaches_the_viewer() {
        let mut state = ModalState::default();
        let p = project("v", &[], Some("/demo.mp4"));
        assert_eq!(p.gallery_len(), 1);
        state.open(p);

        state.open_image(0);
        assert!(!state.viewer().is_active());
        state.next_image();
        state.previous_image();
        assert!(!state.viewer().is_active());
        assert_eq!(state.image_counter(), None);
    }

    #[test]
    fn open_image_requires_an_open_modal() {
        let mut state = ModalState::default();
        state.open(project("a", &["/1.png"], None));
        state.request_close();
        state.open_image(0);
        assert!(!state.viewer().is_active());
    }
}
