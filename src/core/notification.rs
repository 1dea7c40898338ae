//! User-visible notifications raised by the chat session.
//!
//! Notifications are fire-and-forget: the session hands them to whoever drives
//! the UI, which shows them briefly as toasts. Nothing waits for acknowledgement.

/// The notifications the session can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    NewChatStarted,
    ChatCleared,
    BackendUnavailable,
}

/// Presentation severity; only backend failures are error-styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
}

impl Notification {
    pub fn new(kind: NotificationKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NotificationKind::NewChatStarted => "New chat started",
            NotificationKind::ChatCleared => "Chat cleared",
            NotificationKind::BackendUnavailable => "Backend not connected",
        }
    }

    pub fn description(&self) -> &'static str {
        match self.kind {
            NotificationKind::NewChatStarted => "Your conversation history has been cleared.",
            NotificationKind::ChatCleared => "All messages have been removed.",
            NotificationKind::BackendUnavailable => "Please set up your Python API endpoint.",
        }
    }

    pub fn severity(&self) -> Severity {
        match self.kind {
            NotificationKind::BackendUnavailable => Severity::Error,
            NotificationKind::NewChatStarted | NotificationKind::ChatCleared => Severity::Info,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl From<NotificationKind> for Notification {
    fn from(kind: NotificationKind) -> Self {
        Self::new(kind)
    }
}
