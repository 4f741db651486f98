//! Study Buddy - a minimal chat relay in front of Google Gemini
//!
//! The relay (`api`) takes one user message, asks the provider (`llm`) for
//! a reply and returns it. The client side (`client`, `state_machine`) keeps
//! the conversation and sequences one request at a time.

pub mod api;
pub mod client;
pub mod config;
pub mod llm;
pub mod state_machine;
pub mod wire;
