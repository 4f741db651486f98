//! HTTP request handlers

use super::AppState;
use crate::wire::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, INVALID_MESSAGE_ERROR,
    PROVIDER_FAILURE_ERROR,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/chat", post(send_chat))
        .with_state(state)
}

// ============================================================
// Health
// ============================================================

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Study Buddy backend is running".to_string(),
    })
}

// ============================================================
// Chat
// ============================================================

async fn send_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = validate_message(payload)?;

    let reply = state.llm.generate(&message).await.map_err(|e| {
        tracing::error!(
            model = %state.llm.model_id(),
            kind = ?e.kind,
            error = %e,
            "Chat request failed at provider"
        );
        AppError::ProviderFailure
    })?;

    Ok(Json(ChatResponse::new(reply.text)))
}

/// Accept only a JSON object carrying a non-empty string `message`.
fn validate_message(payload: Result<Json<ChatRequest>, JsonRejection>) -> Result<String, AppError> {
    match payload {
        Ok(Json(ChatRequest { message })) if !message.is_empty() => Ok(message),
        Ok(_) => {
            tracing::warn!("Rejected chat request with empty message");
            Err(AppError::InvalidInput)
        }
        Err(
            rejection @ (JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_)),
        ) => {
            tracing::warn!(reason = %rejection.body_text(), "Rejected malformed chat request");
            Err(AppError::InvalidInput)
        }
        // Body too large or unreadable: not a message problem, keep axum's status.
        Err(rejection) => {
            tracing::warn!(
                status = %rejection.status(),
                reason = %rejection.body_text(),
                "Rejected unreadable chat request body"
            );
            Err(AppError::Body(rejection))
        }
    }
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    InvalidInput,
    ProviderFailure,
    Body(JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput => (StatusCode::BAD_REQUEST, INVALID_MESSAGE_ERROR),
            AppError::ProviderFailure => (StatusCode::INTERNAL_SERVER_ERROR, PROVIDER_FAILURE_ERROR),
            AppError::Body(rejection) => return rejection.into_response(),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
