//! Client-side conversation state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions:
//! the store feeds events in and executes the effects that come out.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::ChatState;
pub use transition::{
    transition, TransitionError, TransitionResult, NO_RESPONSE_FALLBACK, TRANSPORT_ERROR_MESSAGE,
};
