//! Pure state transition function

use super::{ChatState, Effect, Event};
use thiserror::Error;

/// Bot text used when the relay answered without a usable `response`
pub const NO_RESPONSE_FALLBACK: &str = "No response received from AI.";

/// Bot text used for every transport failure
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Error: Could not get response from server. Check your backend connection.";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ChatState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ChatState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
///
/// The store treats all of these as silent no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("A request is already in flight")]
    RequestInFlight,
    #[error("Message is empty")]
    EmptyInput,
    #[error("No request is in flight")]
    NotSending,
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs, with no I/O.
/// Failure details are not inspected here; the store logs them.
pub fn transition(state: &ChatState, event: Event) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // Busy: refuse, never queue
        (ChatState::Sending, Event::Submit { .. }) => Err(TransitionError::RequestInFlight),

        (ChatState::Idle, Event::Submit { text }) => {
            if text.trim().is_empty() {
                return Err(TransitionError::EmptyInput);
            }
            Ok(TransitionResult::new(ChatState::Sending)
                .with_effect(Effect::user_message(text.clone()))
                .with_effect(Effect::ClearInput)
                .with_effect(Effect::send(text)))
        }

        (ChatState::Sending, Event::ReplyReceived { response }) => {
            let text = response
                .response
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string());
            Ok(TransitionResult::new(ChatState::Idle).with_effect(Effect::bot_message(text)))
        }

        (ChatState::Sending, Event::RequestFailed { .. }) => {
            Ok(TransitionResult::new(ChatState::Idle)
                .with_effect(Effect::bot_message(TRANSPORT_ERROR_MESSAGE)))
        }

        (ChatState::Idle, Event::ReplyReceived { .. } | Event::RequestFailed { .. }) => {
            Err(TransitionError::NotSending)
        }
    }
}
