//! Application state driven by the chat event loop.
//!
//! [`App`] bundles the chat session with terminal UI state and the toast queue.
//! It is owned by the event loop and changed only through [`apply_actions`].

use std::time::Instant;

use crate::core::config::data::ClientSettings;
use crate::core::notification::Notification;
use crate::core::session::ChatSession;
use crate::ui::layout::{line_count, ChatLayout};
use crate::ui::transcript::build_transcript_lines;

pub mod actions;
pub mod toasts;
pub mod ui_state;

pub use actions::{
    apply_action, apply_actions, AppAction, AppActionContext, AppActionDispatcher,
    AppActionEnvelope, AppCommand,
};
pub use toasts::{Toast, ToastCenter};
pub use ui_state::{SidebarItem, UiFocus, UiState};

pub struct App {
    pub session: ChatSession,
    pub ui: UiState,
    pub toasts: ToastCenter,
    pub endpoint: String,
    /// When the current exchange started; drives the pending animation.
    pending_since: Option<Instant>,
}

impl App {
    pub fn new(settings: &ClientSettings) -> Self {
        Self {
            session: ChatSession::new(),
            ui: UiState::new(),
            toasts: ToastCenter::new(settings.toast_duration),
            endpoint: settings.endpoint.clone(),
            pending_since: None,
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.toasts.push(notification, Instant::now());
    }

    /// Keep the animation clock in step with the session's pending flag.
    pub(crate) fn sync_pending_clock(&mut self) {
        match (self.session.is_pending(), self.pending_since) {
            (true, None) => self.pending_since = Some(Instant::now()),
            (false, Some(_)) => self.pending_since = None,
            _ => {}
        }
    }

    pub fn pending_since(&self) -> Option<Instant> {
        self.pending_since
    }

    /// Largest scroll offset for the transcript at the given terminal size.
    pub fn max_scroll_offset(&self, term_width: u16, term_height: u16) -> u16 {
        let layout = ChatLayout::from_size(term_width, term_height, self.ui.input_line_count());
        let pending = self.pending_since.map(|since| since.elapsed());
        let lines =
            build_transcript_lines(self.session.messages(), layout.transcript.width, pending);
        line_count(lines.len()).saturating_sub(layout.transcript.height)
    }

    pub fn transcript_page_height(&self, term_width: u16, term_height: u16) -> u16 {
        ChatLayout::from_size(term_width, term_height, self.ui.input_line_count())
            .transcript
            .height
            .max(1)
    }
}

#[cfg(test)]
pub(crate) fn create_test_app() -> App {
    use crate::core::constants::DEFAULT_ENDPOINT;
    use std::time::Duration;

    App::new(&ClientSettings {
        endpoint: DEFAULT_ENDPOINT.to_string(),
        request_timeout: None,
        toast_duration: Duration::from_secs(4),
    })
}
