//! Message handling for the page view (TEA pattern).

use folio_content::SectionId;

use crate::state::{ScrollRequest, ViewState};

/// Everything that can change the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Mobile menu button pressed
    ToggleMenu,
    /// Force the mobile menu closed
    CloseMenu,
    /// A navigation button or hero call-to-action was pressed
    Navigate(SectionId),
    /// Typing timer tick
    TypeNextChar,
}

/// Side effects the host performs after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ScrollTo(ScrollRequest),
    /// Caption fully revealed; the typing timer can be released
    TypingFinished,
}

/// Apply a message to the state and return the follow-up action, if any.
pub fn update(state: &mut ViewState, message: Message) -> Option<Action> {
    match message {
        Message::ToggleMenu => {
            state.toggle_menu();
            None
        }

        Message::CloseMenu => {
            state.close_menu();
            None
        }

        Message::Navigate(section) => Some(Action::ScrollTo(state.activate(section))),

        Message::TypeNextChar => {
            if state.advance_typing() && !state.typing_complete() {
                None
            } else {
                Some(Action::TypingFinished)
            }
        }
    }
}
