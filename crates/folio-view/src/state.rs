//! Page view state.

use folio_content::SectionId;

/// How the viewport should move to a scroll target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// A request for the host to bring a section into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: SectionId,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Element id to scroll to.
    pub fn anchor(&self) -> &'static str {
        self.target.anchor()
    }
}

/// Mutable state of the page.
///
/// `typed_len` only grows, and never past `caption_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    menu_open: bool,
    active_section: SectionId,
    typed_len: usize,
    caption_len: usize,
}

impl ViewState {
    /// State at mount: menu closed, hero active, nothing typed yet.
    pub fn new(caption_len: usize) -> Self {
        Self {
            menu_open: false,
            active_section: SectionId::default(),
            typed_len: 0,
            caption_len,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }

    /// Number of caption characters revealed so far.
    pub fn typed_len(&self) -> usize {
        self.typed_len
    }

    pub fn caption_len(&self) -> usize {
        self.caption_len
    }

    pub fn typing_complete(&self) -> bool {
        self.typed_len >= self.caption_len
    }

    /// The revealed prefix of `caption`.
    pub fn typed_text<'a>(&self, caption: &'a str) -> &'a str {
        match caption.char_indices().nth(self.typed_len) {
            Some((end, _)) => &caption[..end],
            None => caption,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Select a section, close the menu and ask for a smooth scroll to it.
    pub fn activate(&mut self, section: SectionId) -> ScrollRequest {
        self.active_section = section;
        self.close_menu();
        ScrollRequest {
            target: section,
            behavior: ScrollBehavior::Smooth,
        }
    }

    /// Reveal one more character. Returns false once the caption is complete.
    pub fn advance_typing(&mut self) -> bool {
        if self.typing_complete() {
            return false;
        }
        self.typed_len += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_with_defaults() {
        let state = ViewState::new(17);

        assert!(!state.menu_open());
        assert_eq!(state.active_section(), SectionId::Inicio);
        assert_eq!(state.typed_len(), 0);
        assert!(!state.typing_complete());
    }

    #[test]
    fn activate_selects_section_and_closes_menu() {
        for section in SectionId::ALL {
            let mut state = ViewState::new(5);
            state.toggle_menu();

            let request = state.activate(section);

            assert_eq!(state.active_section(), section);
            assert!(!state.menu_open());
            assert_eq!(request.target, section);
            assert_eq!(request.anchor(), section.anchor());
            assert_eq!(request.behavior, ScrollBehavior::Smooth);
        }
    }

    #[test]
    fn activate_contact() {
        let mut state = ViewState::new(5);

        let request = state.activate(SectionId::Contacto);

        assert_eq!(state.active_section(), SectionId::Contacto);
        assert!(!state.menu_open());
        assert_eq!(request.anchor(), "contacto");
    }

    #[test]
    fn double_toggle_restores_menu() {
        let mut state = ViewState::new(5);
        let before = state;

        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();

        assert_eq!(state, before);
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = ViewState::new(5);

        state.close_menu();
        assert!(!state.menu_open());

        state.toggle_menu();
        state.close_menu();
        state.close_menu();
        assert!(!state.menu_open());
    }

    #[test]
    fn typing_stops_at_caption_length() {
        let mut state = ViewState::new(3);

        assert!(state.advance_typing());
        assert!(state.advance_typing());
        assert!(state.advance_typing());
        assert!(!state.advance_typing());

        assert_eq!(state.typed_len(), 3);
        assert!(state.typing_complete());
    }

    #[test]
    fn typed_text_respects_char_boundaries() {
        let caption = "Diseño web";
        let mut state = ViewState::new(caption.chars().count());

        for _ in 0..5 {
            state.advance_typing();
        }
        assert_eq!(state.typed_text(caption), "Diseñ");

        while state.advance_typing() {}
        assert_eq!(state.typed_text(caption), caption);
    }

    #[test]
    fn empty_caption_is_complete_at_mount() {
        let mut state = ViewState::new(0);

        assert!(state.typing_complete());
        assert!(!state.advance_typing());
        assert_eq!(state.typed_text(""), "");
    }
}
