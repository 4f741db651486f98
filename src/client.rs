//! Conversation client
//!
//! [`ConversationStore`] is the single source of truth for a rendered
//! conversation. It feeds user input and relay outcomes through the pure
//! [`state_machine`](crate::state_machine) and talks to the relay through a
//! [`ChatTransport`].

mod message;
mod store;
mod transport;

#[cfg(test)]
pub mod testing;

pub use message::{Message, Sender};
pub use store::ConversationStore;
pub use transport::{ChatTransport, HttpTransport, TransportError, DEFAULT_RELAY_URL};
