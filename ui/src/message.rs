//! The transient success/error notice shown next to the signup form.

use std::time::Duration;

/// How long a message stays visible before it hides itself.
pub const MESSAGE_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class of the message area for this kind.
    pub fn class(&self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TransientMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl TransientMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

/// Holds the one live message.
///
/// Every post bumps a generation counter and hands it back as a ticket. Only
/// the ticket of the latest post can expire the message, so a hide timer that
/// outlived its message never dismisses a newer one.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct MessageBoard {
    current: Option<TransientMessage>,
    generation: u64,
}

impl MessageBoard {
    /// Replaces whatever is showing and returns the ticket for hiding it.
    pub fn post(&mut self, message: TransientMessage) -> u64 {
        self.generation += 1;
        self.current = Some(message);
        self.generation
    }

    /// Hides the message if `ticket` belongs to it. Returns whether anything was hidden.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&TransientMessage> {
        self.current.as_ref()
    }

    /// CSS class for the message area: the kind while visible, `hidden` otherwise.
    pub fn class(&self) -> &'static str {
        match &self.current {
            Some(message) => message.kind.class(),
            None => "hidden",
        }
    }
}
