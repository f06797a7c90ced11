//! Follow-up chat endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use legalai_common::api::{ChatRequest, ChatResponse};
use tracing::info;

use crate::{ApiError, ApiResult, AppState};

/// POST /api/chat
///
/// **Request:** `{"message": "...", "context": "Term: explanation\n..."}`
/// (`context` optional)
/// **Response:** `{"response": "..."}`
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(payload) = payload?;

    if payload.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message is required".to_string()));
    }

    info!(
        chars = payload.message.len(),
        has_context = payload.context.is_some(),
        "Chat question received"
    );

    let response = state
        .gateway
        .ask_follow_up(&payload.message, payload.context.as_deref())
        .await?;

    Ok(Json(ChatResponse { response }))
}

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/api/chat", post(chat))
}
