use axum::{
    extract::{Path, State},
    Json,
};
use bson::oid::ObjectId;
use shared::{
    CreateNoteRequest, CreateNoteResponse, NotesResponse, SuccessResponse, UpdateNoteRequest,
};

use crate::{
    database::{note_repository::NoteRepository, Database},
    error::AppError,
};

pub async fn create_note(
    State(db): State<Database>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Json<CreateNoteResponse>, AppError> {
    let note_id = NoteRepository::create(&db, &req).await?;
    Ok(Json(CreateNoteResponse {
        success: true,
        note_id: note_id.to_hex(),
    }))
}

pub async fn notes_by_email(
    State(db): State<Database>,
    Path(email): Path<String>,
) -> Result<Json<NotesResponse>, AppError> {
    let notes = NoteRepository::find_by_email(&db, &email).await?;
    Ok(Json(NotesResponse {
        success: true,
        notes: notes.into_iter().map(Into::into).collect(),
    }))
}

pub async fn update_note(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let note_id = parse_note_id(&id)?;
    NoteRepository::update(&db, &note_id, &req).await?;
    Ok(Json(SuccessResponse { success: true }))
}

pub async fn delete_note(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let note_id = parse_note_id(&id)?;
    NoteRepository::delete(&db, &note_id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

fn parse_note_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::InvalidInput("Invalid note id".to_string()))
}
