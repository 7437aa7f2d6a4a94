use axum::{extract::State, Json};
use shared::{ChatRequest, ChatResponse};
use std::sync::Arc;
use tracing::debug;

use crate::services::chatbot::ChatbotClient;

/// Chat never surfaces an error status: failures inside the client degrade
/// to a canned apology, so this handler is infallible by contract.
pub async fn chatbot_reply(
    State(chatbot): State<Arc<ChatbotClient>>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    debug!("[CHATBOT] Incoming message ({} chars)", req.message.len());

    Json(ChatResponse {
        reply: chatbot.reply(&req.message).await,
    })
}
