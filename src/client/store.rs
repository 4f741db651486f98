//! Conversation store

use super::{ChatTransport, Message, TransportError};
use crate::state_machine::{transition, ChatState, Effect, Event};
use crate::wire::{ChatRequest, ChatResponse};

/// Ordered message history plus input and request state for one conversation.
///
/// Messages are only ever appended. At most one request is in flight; a
/// submission while one is outstanding is ignored.
pub struct ConversationStore<T> {
    transport: T,
    messages: Vec<Message>,
    pending_input: String,
    state: ChatState,
}

impl<T: ChatTransport> ConversationStore<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            messages: Vec::new(),
            pending_input: String::new(),
            state: ChatState::Idle,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn awaiting_response(&self) -> bool {
        self.state.is_sending()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether the send control should be enabled
    pub fn can_submit(&self) -> bool {
        self.state.accepts_input() && !self.pending_input.trim().is_empty()
    }

    /// Replace the pending input. Ignored while a request is in flight.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if !self.state.accepts_input() {
            tracing::debug!("Input is locked while awaiting a response");
            return;
        }
        self.pending_input = text.into();
    }

    /// Submit whatever is in the pending input.
    pub async fn submit_pending(&mut self) {
        let text = self.pending_input.clone();
        self.submit(&text).await;
    }

    /// Run one full round trip for `text`.
    ///
    /// Silently does nothing if `text` is blank or a request is already in
    /// flight. Failures are never returned; they become a bot message. The
    /// store is back to `Idle` when this returns, and also if the future is
    /// dropped before completing.
    pub async fn submit(&mut self, text: &str) {
        self.submit_with(text, |_| {}).await;
    }

    /// Like [`submit`](Self::submit), but calls `on_sending` once the user
    /// message is recorded and before the request goes out.
    ///
    /// `on_sending` is not called when the submission is refused.
    pub async fn submit_with(&mut self, text: &str, on_sending: impl FnOnce(&Self)) {
        let Some(request) = self.begin_submit(text) else {
            return;
        };
        on_sending(self);

        let in_flight = InFlight {
            store: self,
            resolved: false,
        };
        let outcome = in_flight.store.transport.send(&request).await;
        in_flight.finish(outcome);
    }

    /// First half of a round trip: record the user message and lock input.
    ///
    /// Returns the request to send, or `None` when the submission was refused.
    pub fn begin_submit(&mut self, text: &str) -> Option<ChatRequest> {
        self.apply(Event::Submit {
            text: text.to_string(),
        })
    }

    /// Second half of a round trip: record the reply (or failure) and unlock input.
    pub fn resolve(&mut self, outcome: Result<ChatResponse, TransportError>) {
        let event = match outcome {
            Ok(response) => Event::ReplyReceived { response },
            Err(error) => {
                if self.state.is_sending() {
                    tracing::warn!(error = %error, "Chat request failed");
                }
                Event::RequestFailed { error }
            }
        };
        self.apply(event);
    }

    fn apply(&mut self, event: Event) -> Option<ChatRequest> {
        let result = match transition(&self.state, event) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring chat event");
                return None;
            }
        };

        self.state = result.new_state;

        let mut outbound = None;
        for effect in result.effects {
            match effect {
                Effect::AppendMessage { sender, text } => {
                    self.messages.push(Message::new(sender, text));
                }
                Effect::ClearInput => self.pending_input.clear(),
                Effect::SendRequest { request } => outbound = Some(request),
            }
        }
        outbound
    }
}

/// Holds the store while a request is outstanding and guarantees it is resolved.
struct InFlight<'a, T: ChatTransport> {
    store: &'a mut ConversationStore<T>,
    resolved: bool,
}

impl<T: ChatTransport> InFlight<'_, T> {
    fn finish(mut self, outcome: Result<ChatResponse, TransportError>) {
        self.resolved = true;
        self.store.resolve(outcome);
    }
}

impl<T: ChatTransport> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if !self.resolved {
            self.store.resolve(Err(TransportError::Abandoned));
        }
    }
}
