//! Events that can occur in a conversation

use crate::client::TransportError;
use crate::wire::ChatResponse;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    Submit {
        text: String,
    },

    // Relay events
    ReplyReceived {
        response: ChatResponse,
    },
    RequestFailed {
        error: TransportError,
    },
}
