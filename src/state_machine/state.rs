//! Conversation state types

/// Request lifecycle of a conversation.
///
/// There is no queue: while `Sending`, further submissions are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    /// No request outstanding, input enabled
    #[default]
    Idle,
    /// One request in flight, input disabled
    Sending,
}

impl ChatState {
    pub fn is_sending(self) -> bool {
        self == ChatState::Sending
    }

    /// Whether the input control should accept edits and submissions
    pub fn accepts_input(self) -> bool {
        !self.is_sending()
    }
}
