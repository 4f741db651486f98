//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::client::testing::MockTransport;
use crate::client::{ConversationStore, Sender, TransportError};
use crate::wire::ChatResponse;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ?!.]{0,40}"
}

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

fn arb_transport_error() -> impl Strategy<Value = TransportError> {
    prop_oneof![
        "[a-z ]{1,20}".prop_map(TransportError::Network),
        (400u16..600).prop_map(TransportError::Status),
        "[a-z ]{1,20}".prop_map(TransportError::Decode),
        Just(TransportError::Abandoned),
    ]
}

fn arb_outcome() -> impl Strategy<Value = Result<ChatResponse, TransportError>> {
    prop_oneof![
        arb_text().prop_map(|t| Ok(ChatResponse::new(t))),
        Just(Ok(ChatResponse { response: None })),
        arb_transport_error().prop_map(Err),
    ]
}

fn arb_state() -> impl Strategy<Value = ChatState> {
    prop_oneof![
        Just(ChatState::Idle),
        Just(ChatState::Sending),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        arb_text().prop_map(|text| Event::Submit { text }),
        arb_outcome().prop_map(|outcome| match outcome {
            Ok(response) => Event::ReplyReceived { response },
            Err(error) => Event::RequestFailed { error },
        }),
    ]
}

/// One user step against a store
#[derive(Debug, Clone)]
enum Step {
    Submit(String),
    Resolve(Result<ChatResponse, TransportError>),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        arb_text().prop_map(Step::Submit),
        arb_outcome().prop_map(Step::Resolve),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_only_idle_submit_enters_sending(state in arb_state(), event in arb_event()) {
        let was_idle = state == ChatState::Idle;
        let is_submit = matches!(&event, Event::Submit { text } if !text.trim().is_empty());

        if let Ok(result) = transition(&state, event) {
            if result.new_state.is_sending() {
                prop_assert!(was_idle && is_submit);
            }
        }
    }

    #[test]
    fn prop_sending_refuses_submit(text in arb_text()) {
        let result = transition(&ChatState::Sending, Event::Submit { text });
        prop_assert_eq!(result.unwrap_err(), TransitionError::RequestInFlight);
    }

    #[test]
    fn prop_every_outcome_returns_to_idle(outcome in arb_outcome()) {
        let event = match outcome {
            Ok(response) => Event::ReplyReceived { response },
            Err(error) => Event::RequestFailed { error },
        };

        let result = transition(&ChatState::Sending, event).unwrap();
        prop_assert_eq!(result.new_state, ChatState::Idle);
        prop_assert_eq!(result.effects.len(), 1);
        let appends_bot = matches!(
            &result.effects[0],
            Effect::AppendMessage { sender: Sender::Bot, text } if !text.is_empty()
        );
        prop_assert!(appends_bot);
    }

    #[test]
    fn prop_blank_submit_is_noop(text in arb_blank()) {
        let mut store = ConversationStore::new(MockTransport::new());
        store.set_input(text.clone());

        prop_assert_eq!(store.begin_submit(&text), None);
        prop_assert!(store.messages().is_empty());
        prop_assert_eq!(store.state(), &ChatState::Idle);
        prop_assert_eq!(store.pending_input(), text.as_str());
    }

    #[test]
    fn prop_each_cycle_adds_two_messages(
        cycles in proptest::collection::vec(("[a-z]{1,10}", arb_outcome()), 0..20)
    ) {
        let mut store = ConversationStore::new(MockTransport::new());

        for (i, (text, outcome)) in cycles.into_iter().enumerate() {
            prop_assert!(store.begin_submit(&text).is_some());
            prop_assert_eq!(store.messages().len(), 2 * i + 1);
            store.resolve(outcome);
            prop_assert_eq!(store.messages().len(), 2 * i + 2);
            prop_assert_eq!(store.state(), &ChatState::Idle);
        }
    }

    #[test]
    fn prop_history_alternates_user_then_bot(steps in proptest::collection::vec(arb_step(), 0..40)) {
        let mut store = ConversationStore::new(MockTransport::new());

        for step in steps {
            let before = store.messages().len();
            match step {
                Step::Submit(text) => {
                    let accepted = store.begin_submit(&text).is_some();
                    prop_assert_eq!(store.messages().len(), before + usize::from(accepted));
                }
                Step::Resolve(outcome) => {
                    let was_sending = store.awaiting_response();
                    store.resolve(outcome);
                    prop_assert_eq!(store.messages().len(), before + usize::from(was_sending));
                    prop_assert!(!store.awaiting_response());
                }
            }
        }

        // Every user turn is followed by its bot turn, except a still-pending last one.
        for (i, message) in store.messages().iter().enumerate() {
            let expected = if i % 2 == 0 { Sender::User } else { Sender::Bot };
            prop_assert_eq!(message.sender(), expected);
        }
        prop_assert_eq!(store.messages().len() % 2 == 1, store.awaiting_response());
    }
}
