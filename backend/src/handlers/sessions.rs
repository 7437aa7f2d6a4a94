use axum::{
    extract::{Path, State},
    Json,
};
use shared::SessionResponse;
use tracing::debug;

use crate::{
    database::{session_repository::SessionRepository, Database},
    error::AppError,
};

/// All sessions, public browsing surface.
pub async fn list_sessions(
    State(db): State<Database>,
) -> Result<Json<Vec<SessionResponse>>, AppError> {
    let sessions = SessionRepository::find_all(&db).await?;
    Ok(Json(sessions.into_iter().map(Into::into).collect()))
}

/// Fetch one session. The identifier may be a canonical ObjectId or a
/// legacy plain-string id; resolution is the explicit two-step fallback.
pub async fn get_session(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    debug!("[SESSIONS] Fetching session {}", id);

    let session = SessionRepository::find_by_any_id(&db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    Ok(Json(session.into()))
}
