//! Moderation surface. Every route in this module sits behind the
//! admin-role middleware.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use bson::oid::ObjectId;
use shared::{
    ApproveSessionRequest, MessageResponse, RejectSessionRequest, SessionResponse,
    UpdateRoleRequest, UserRecord, UserSearchQuery,
};
use tracing::info;

use crate::{
    database::{
        material_repository::MaterialRepository, models::SessionId,
        session_repository::SessionRepository, user_repository::UserRepository, Database,
    },
    error::AppError,
};

const VALID_ROLES: &[&str] = &["student", "tutor", "admin"];

pub async fn list_users(State(db): State<Database>) -> Result<Json<Vec<UserRecord>>, AppError> {
    let users = UserRepository::find_all(&db).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Case-insensitive substring search against display name or email.
pub async fn search_users(
    State(db): State<Database>,
    Query(params): Query<UserSearchQuery>,
) -> Result<Json<Vec<UserRecord>>, AppError> {
    let users = UserRepository::search(&db, &params.q).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

pub async fn update_user_role(
    State(db): State<Database>,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if !VALID_ROLES.contains(&req.role.as_str()) {
        return Err(AppError::InvalidInput(format!("Unknown role: {}", req.role)));
    }

    let id = ObjectId::parse_str(&user_id)
        .map_err(|_| AppError::InvalidInput("Invalid user id".to_string()))?;

    let matched = UserRepository::update_role(&db, &id, &req.role).await?;
    if !matched {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    info!("[ADMIN] Role for {} set to {}", user_id, req.role);
    Ok(Json(MessageResponse {
        message: "User role updated successfully".to_string(),
    }))
}

pub async fn list_sessions(
    State(db): State<Database>,
) -> Result<Json<Vec<SessionResponse>>, AppError> {
    let sessions = SessionRepository::find_all(&db).await?;
    Ok(Json(sessions.into_iter().map(Into::into).collect()))
}

pub async fn approve_session(
    State(db): State<Database>,
    Path(session_id): Path<String>,
    Json(req): Json<ApproveSessionRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = SessionId::parse(&session_id);
    let matched = SessionRepository::approve(&db, &id, req.is_paid, req.registration_fee).await?;

    if !matched {
        return Err(AppError::NotFound("Session not found".to_string()));
    }

    info!("[ADMIN] ✅ Session approved: {}", id);
    Ok(Json(MessageResponse {
        message: "Session approved successfully".to_string(),
    }))
}

pub async fn reject_session(
    State(db): State<Database>,
    Path(session_id): Path<String>,
    Json(req): Json<RejectSessionRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = SessionId::parse(&session_id);
    let matched = SessionRepository::reject(&db, &id, &req.reason, &req.response).await?;

    if !matched {
        return Err(AppError::NotFound("Session not found".to_string()));
    }

    info!("[ADMIN] ❌ Session rejected: {}", id);
    Ok(Json(MessageResponse {
        message: "Session rejected successfully".to_string(),
    }))
}

pub async fn delete_session(
    State(db): State<Database>,
    Path(session_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = SessionId::parse(&session_id);
    let deleted = SessionRepository::delete(&db, &id).await?;

    if !deleted {
        return Err(AppError::NotFound("Session not found".to_string()));
    }

    info!("[ADMIN] Session deleted: {}", id);
    Ok(Json(MessageResponse {
        message: "Session deleted successfully".to_string(),
    }))
}

pub async fn list_materials(
    State(db): State<Database>,
) -> Result<Json<Vec<shared::MaterialResponse>>, AppError> {
    let materials = MaterialRepository::find_all(&db).await?;
    Ok(Json(materials.into_iter().map(Into::into).collect()))
}

pub async fn delete_material(
    State(db): State<Database>,
    Path(material_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = ObjectId::parse_str(&material_id)
        .map_err(|_| AppError::InvalidInput("Invalid material id".to_string()))?;

    let deleted = MaterialRepository::delete(&db, &id).await?;
    if !deleted {
        return Err(AppError::NotFound("Material not found".to_string()));
    }

    info!("[ADMIN] Material deleted: {}", material_id);
    Ok(Json(MessageResponse {
        message: "Material deleted successfully".to_string(),
    }))
}
