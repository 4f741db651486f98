//! Wire types shared by the relay and its clients

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error text returned when a chat request has no usable message
pub const INVALID_MESSAGE_ERROR: &str = "Message is required and must be a string";

/// Error text returned when the provider call fails
pub const PROVIDER_FAILURE_ERROR: &str = "Failed to generate response";

/// Request to send a chat message
///
/// Only a JSON object carrying a string `message` parses; arrays, missing
/// fields and non-string values are all rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ChatRequest {
    pub message: String,
}

impl TryFrom<Map<String, Value>> for ChatRequest {
    type Error = String;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        match object.remove("message") {
            Some(Value::String(message)) => Ok(Self { message }),
            Some(other) => Err(format!("message must be a string, got {other}")),
            None => Err("missing field `message`".to_string()),
        }
    }
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful chat reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Clients treat a missing field the same as an empty one.
    #[serde(default)]
    pub response: Option<String>,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }
}

/// Health check payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
