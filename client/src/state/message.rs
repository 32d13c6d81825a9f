//! Transient status message shown above the board.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::time::Duration;

/// How long a message stays visible.
pub const MESSAGE_LIFETIME: Duration = Duration::from_secs(5);

/// Message severity. Doubles as the CSS class of the `#message` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

impl MessageKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
}

/// At most one visible message.
#[derive(Clone, Debug, Default)]
pub struct MessageState {
    pub current: Option<StatusMessage>,
    next_id: u64,
}

impl MessageState {
    /// Replace whatever is showing and return the new message's id.
    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(StatusMessage { id: self.next_id, kind, text: text.into() });
        self.next_id
    }

    /// Hide message `id` if it is still the one showing.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|m| m.id == id) {
            self.current = None;
            return true;
        }
        false
    }
}
