//! Chat and automation handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::{error, info};

use aiva_protocols::intent::DispatchOutcome;
use aiva_protocols::types::ChatTurn;

use crate::error::ApiError;
use crate::state::AppState;

/// User-facing message for chat provider failures.
const CHAT_PROVIDER_FAILED: &str = "Failed to get a response from the AI model.";
/// User-facing message for automation provider failures.
const AUTOMATE_PROVIDER_FAILED: &str = "Failed to process command with AI model.";

/// Chat request body.
///
/// The chat endpoint takes the full conversation history: the backend is
/// stateless, so the caller owns the conversation.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Option<Vec<ChatTurn>>,
}

/// Automation request body.
#[derive(Debug, Deserialize)]
pub struct AutomateRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Forward a conversation history to the model and relay its reply.
///
/// POST /api/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<DispatchOutcome>, ApiError> {
    let history = req
        .history
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ApiError::Validation("No history provided".to_string()))?;

    info!("chat request with {} turn(s)", history.len());

    let reply = state.generator.chat(&history).await.map_err(|e| {
        error!("chat provider call failed: {}", e);
        ApiError::Provider(CHAT_PROVIDER_FAILED.to_string())
    })?;

    Ok(Json(DispatchOutcome::success(reply)))
}

/// Interpret a free-text command and dispatch the matching action.
///
/// POST /api/automate
///
/// Rejected commands (unknown intent, missing parameters) are normal
/// outcomes: HTTP 200 with `status: "error"`.
pub async fn automate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AutomateRequest>,
) -> Result<Json<DispatchOutcome>, ApiError> {
    let message = req
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("No message provided".to_string()))?;

    info!("automation request");

    let outcome = state.dispatcher.dispatch(&message).await.map_err(|e| {
        error!("command dispatch failed: {}", e);
        ApiError::Provider(AUTOMATE_PROVIDER_FAILED.to_string())
    })?;

    Ok(Json(outcome))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
