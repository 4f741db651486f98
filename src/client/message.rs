//! Conversation messages

use chrono::{DateTime, Local, Utc};
use std::fmt;
use uuid::Uuid;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn display_name(self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Study Buddy",
        }
    }
}

/// A single entry in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    text: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// UUID v7 ids sort by creation time, so ids never collide within a session.
    pub(crate) fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.with_timezone(&Local).format("%H:%M:%S"),
            self.sender.display_name(),
            self.text
        )
    }
}
