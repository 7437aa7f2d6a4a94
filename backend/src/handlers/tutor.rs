use axum::{
    extract::{Path, State},
    Json,
};
use shared::{
    CreateSessionRequest, CreateSessionResponse, SessionListResponse, SuccessResponse,
};
use tracing::info;

use crate::{
    database::{models::SessionId, session_repository::SessionRepository, Database},
    error::AppError,
};

/// Create a study session. Status and fee are forced server-side.
pub async fn create_session(
    State(db): State<Database>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    info!("[TUTOR] New session from {}: {}", req.tutor_email, req.title);

    let session_id = SessionRepository::create(&db, &req).await?;

    Ok(Json(CreateSessionResponse {
        success: true,
        session_id: session_id.to_string(),
    }))
}

pub async fn tutor_sessions(
    State(db): State<Database>,
    Path(email): Path<String>,
) -> Result<Json<SessionListResponse>, AppError> {
    let sessions = SessionRepository::find_by_tutor(&db, &email).await?;
    Ok(Json(SessionListResponse {
        success: true,
        sessions: sessions.into_iter().map(Into::into).collect(),
    }))
}

/// Put a rejected session back into the moderation queue.
pub async fn resubmit_session(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let session_id = SessionId::parse(&id);
    let matched = SessionRepository::resubmit(&db, &session_id).await?;

    if !matched {
        return Err(AppError::NotFound("Session not found".to_string()));
    }

    info!("[TUTOR] Session resubmitted: {}", session_id);
    Ok(Json(SuccessResponse { success: true }))
}

/// Approved sessions only; feeds the material-upload picker.
pub async fn approved_sessions(
    State(db): State<Database>,
    Path(email): Path<String>,
) -> Result<Json<SessionListResponse>, AppError> {
    let sessions = SessionRepository::find_approved_by_tutor(&db, &email).await?;
    Ok(Json(SessionListResponse {
        success: true,
        sessions: sessions.into_iter().map(Into::into).collect(),
    }))
}
