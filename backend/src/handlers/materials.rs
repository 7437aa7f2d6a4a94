use axum::{
    extract::{Path, State},
    Json,
};
use bson::oid::ObjectId;
use shared::{
    CreateMaterialRequest, CreateMaterialResponse, MaterialsResponse, SuccessResponse,
    UpdateMaterialRequest,
};
use tracing::info;

use crate::{
    database::{material_repository::MaterialRepository, Database},
    error::AppError,
};

/// Materials attached to one session (student view).
pub async fn session_materials(
    State(db): State<Database>,
    Path(session_id): Path<String>,
) -> Result<Json<MaterialsResponse>, AppError> {
    let materials = MaterialRepository::find_by_session(&db, &session_id).await?;
    Ok(Json(MaterialsResponse {
        success: true,
        materials: materials.into_iter().map(Into::into).collect(),
    }))
}

pub async fn upload_material(
    State(db): State<Database>,
    Json(req): Json<CreateMaterialRequest>,
) -> Result<Json<CreateMaterialResponse>, AppError> {
    info!(
        "[MATERIALS] {} uploading for session {}",
        req.tutor_email, req.study_session_id
    );

    let material_id = MaterialRepository::create(&db, &req).await?;

    Ok(Json(CreateMaterialResponse {
        success: true,
        material_id: material_id.to_hex(),
    }))
}

/// Every material from every tutor.
pub async fn all_materials(
    State(db): State<Database>,
) -> Result<Json<MaterialsResponse>, AppError> {
    let materials = MaterialRepository::find_all(&db).await?;
    Ok(Json(MaterialsResponse {
        success: true,
        materials: materials.into_iter().map(Into::into).collect(),
    }))
}

pub async fn tutor_materials(
    State(db): State<Database>,
    Path(email): Path<String>,
) -> Result<Json<MaterialsResponse>, AppError> {
    let materials = MaterialRepository::find_by_tutor(&db, &email).await?;
    Ok(Json(MaterialsResponse {
        success: true,
        materials: materials.into_iter().map(Into::into).collect(),
    }))
}

pub async fn update_material(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMaterialRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let material_id = parse_material_id(&id)?;
    MaterialRepository::update(&db, &material_id, &req).await?;
    Ok(Json(SuccessResponse { success: true }))
}

pub async fn delete_material(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let material_id = parse_material_id(&id)?;
    MaterialRepository::delete(&db, &material_id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

fn parse_material_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::InvalidInput("Invalid material id".to_string()))
}
