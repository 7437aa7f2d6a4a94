use bson::{doc, oid::ObjectId, DateTime};
use futures_util::TryStreamExt;
use shared::{CreateNoteRequest, UpdateNoteRequest};

use super::{models::Note, Database};
use crate::error::AppError;

pub struct NoteRepository;

impl NoteRepository {
    pub async fn create(db: &Database, req: &CreateNoteRequest) -> Result<ObjectId, AppError> {
        let note = Note {
            id: ObjectId::new(),
            email: req.email.clone(),
            title: req.title.clone(),
            description: req.description.clone(),
            created_at: DateTime::now(),
            updated_at: None,
        };
        db.notes.insert_one(&note).await?;
        Ok(note.id)
    }

    pub async fn find_by_email(db: &Database, email: &str) -> Result<Vec<Note>, AppError> {
        Ok(db
            .notes
            .find(doc! { "email": email })
            .await?
            .try_collect()
            .await?)
    }

    pub async fn update(
        db: &Database,
        id: &ObjectId,
        req: &UpdateNoteRequest,
    ) -> Result<(), AppError> {
        db.notes
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": {
                    "title": req.title.as_str(),
                    "description": req.description.as_str(),
                    "updatedAt": DateTime::now(),
                } },
            )
            .await?;
        Ok(())
    }

    pub async fn delete(db: &Database, id: &ObjectId) -> Result<(), AppError> {
        db.notes.delete_one(doc! { "_id": *id }).await?;
        Ok(())
    }
}
