//! Message endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{Message, MessageText, MESSAGE_LIST_LIMIT};

/// List messages response
#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<Message>,
}

/// Create message response
#[derive(Debug, Serialize)]
pub struct MessageCreatedResponse {
    pub message: Message,
}

/// GET /api/messages - newest messages first, at most 50
async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageListResponse>, ApiError> {
    let messages = state.store.recent(MESSAGE_LIST_LIMIT).await?;
    Ok(Json(MessageListResponse { messages }))
}

/// POST /api/messages - store trimmed text
async fn create_message(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<MessageCreatedResponse>), ApiError> {
    let text = MessageText::from_body(&body)?;
    let message = state.store.insert(&text).await?;

    tracing::debug!(id = message.id, "Message created");
    Ok((StatusCode::CREATED, Json(MessageCreatedResponse { message })))
}

/// Message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/messages", get(list_messages).post(create_message))
}
