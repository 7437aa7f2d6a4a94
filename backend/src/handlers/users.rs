use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::{RegisterUserRequest, RegisterUserResponse, RoleResponse, UserInfo};
use tracing::{debug, info};

use crate::{
    database::{user_repository::UserRepository, Database},
    error::AppError,
};

/// Idempotent registration: a uid that is already registered returns the
/// stored record unchanged instead of creating a duplicate.
pub async fn register_user(
    State(db): State<Database>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<RegisterUserResponse>), AppError> {
    info!("[USERS] Registration request for {}", req.uid);

    if let Some(existing) = UserRepository::find_by_uid(&db, &req.uid).await? {
        debug!("[USERS] {} already registered", req.uid);
        return Ok((
            StatusCode::OK,
            Json(RegisterUserResponse {
                message: "User already exists".to_string(),
                user: Some(existing.into()),
                user_id: None,
            }),
        ));
    }

    let user_id = UserRepository::create(&db, &req).await?;

    info!("[USERS] ✅ User created: {}", user_id.to_hex());
    Ok((
        StatusCode::CREATED,
        Json(RegisterUserResponse {
            message: "User created successfully".to_string(),
            user: None,
            user_id: Some(user_id.to_hex()),
        }),
    ))
}

pub async fn get_user(
    State(db): State<Database>,
    Path(uid): Path<String>,
) -> Result<Json<UserInfo>, AppError> {
    let user = UserRepository::find_by_uid(&db, &uid)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

pub async fn get_user_role(
    State(db): State<Database>,
    Path(uid): Path<String>,
) -> Result<Json<RoleResponse>, AppError> {
    let user = UserRepository::find_by_uid(&db, &uid)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(RoleResponse { role: user.role }))
}
