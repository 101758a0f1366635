//! The page view component.

use std::time::Duration;

use folio_content::SectionId;
use tokio::sync::mpsc;

use crate::state::{ScrollRequest, ViewState};
use crate::typing::TypingTimer;
use crate::update::{update, Action, Message};

/// Host surface that can bring an anchor into view.
pub trait Viewport {
    fn scroll_into_view(&mut self, request: ScrollRequest);
}

/// Owner of all page state for one mount.
///
/// Mounting resets the state and starts the typing timer; unmounting (or
/// dropping the view) cancels the timer, so nothing mutates the state after
/// teardown.
pub struct PageView<V: Viewport> {
    state: ViewState,
    caption: String,
    viewport: V,
    inbox: mpsc::UnboundedReceiver<Message>,
    typing: TypingTimer,
}

impl<V: Viewport> PageView<V> {
    /// Mount the view and start revealing `caption`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn mount(caption: impl Into<String>, interval: Duration, viewport: V) -> Self {
        let caption = caption.into();
        let caption_len = caption.chars().count();
        let (tx, inbox) = mpsc::unbounded_channel();

        tracing::debug!(
            "Mounting page view, typing {} chars every {:?}",
            caption_len,
            interval
        );

        Self {
            state: ViewState::new(caption_len),
            caption,
            viewport,
            inbox,
            typing: TypingTimer::start(caption_len, interval, tx),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Caption prefix revealed so far.
    pub fn typed_text(&self) -> &str {
        self.state.typed_text(&self.caption)
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Whether the typing timer is still running.
    pub fn is_typing(&self) -> bool {
        !self.typing.is_finished()
    }

    pub fn toggle_menu(&mut self) {
        self.dispatch(Message::ToggleMenu);
    }

    pub fn close_menu(&mut self) {
        self.dispatch(Message::CloseMenu);
    }

    /// Navigate to a section.
    pub fn activate(&mut self, section: SectionId) {
        self.dispatch(Message::Navigate(section));
    }

    /// Apply one message and perform its follow-up action.
    pub fn dispatch(&mut self, message: Message) {
        if let Some(action) = update(&mut self.state, message) {
            self.perform(action);
        }
    }

    /// Apply every timer message queued so far. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.inbox.try_recv() {
            self.dispatch(message);
            applied += 1;
        }
        applied
    }

    /// Wait for the next timer message and apply it.
    ///
    /// Returns `false` once the timer has stopped and the queue is empty.
    pub async fn next_tick(&mut self) -> bool {
        match self.inbox.recv().await {
            Some(message) => {
                self.dispatch(message);
                true
            }
            None => false,
        }
    }

    /// Tear the view down and return its final state.
    pub fn unmount(mut self) -> ViewState {
        self.teardown();
        self.state
    }

    /// Abort the timer and close the inbox so no tick is applied afterwards.
    fn teardown(&mut self) {
        self.typing.cancel();
        self.inbox.close();
        tracing::debug!(
            "Unmounted page view at {}/{} chars",
            self.state.typed_len(),
            self.state.caption_len()
        );
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::ScrollTo(request) => self.viewport.scroll_into_view(request),
            Action::TypingFinished => self.typing.cancel(),
        }
    }
}
