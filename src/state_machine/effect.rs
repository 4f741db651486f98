//! Effects produced by state transitions

use crate::client::Sender;
use crate::wire::ChatRequest;

/// Effects to be executed by the store after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a message to the conversation
    AppendMessage { sender: Sender, text: String },

    /// Empty the pending input field
    ClearInput,

    /// Send exactly one request to the relay
    SendRequest { request: ChatRequest },
}

impl Effect {
    pub fn user_message(text: impl Into<String>) -> Self {
        Effect::AppendMessage {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot_message(text: impl Into<String>) -> Self {
        Effect::AppendMessage {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn send(text: impl Into<String>) -> Self {
        Effect::SendRequest {
            request: ChatRequest::new(text),
        }
    }
}
