use bson::{doc, oid::ObjectId, DateTime};
use futures_util::TryStreamExt;
use shared::{CreateMaterialRequest, UpdateMaterialRequest};

use super::{models::StudyMaterial, Database};
use crate::error::AppError;

pub struct MaterialRepository;

impl MaterialRepository {
    pub async fn create(db: &Database, req: &CreateMaterialRequest) -> Result<ObjectId, AppError> {
        let material = StudyMaterial {
            id: ObjectId::new(),
            study_session_id: req.study_session_id.clone(),
            tutor_email: req.tutor_email.clone(),
            title: req.title.clone(),
            image_url: req.image_url.clone(),
            drive_link: req.drive_link.clone(),
            uploaded_at: DateTime::now(),
            updated_at: None,
        };
        db.materials.insert_one(&material).await?;
        Ok(material.id)
    }

    pub async fn find_all(db: &Database) -> Result<Vec<StudyMaterial>, AppError> {
        Ok(db.materials.find(doc! {}).await?.try_collect().await?)
    }

    pub async fn find_by_session(
        db: &Database,
        session_id: &str,
    ) -> Result<Vec<StudyMaterial>, AppError> {
        Ok(db
            .materials
            .find(doc! { "studySessionId": session_id })
            .await?
            .try_collect()
            .await?)
    }

    pub async fn find_by_tutor(db: &Database, email: &str) -> Result<Vec<StudyMaterial>, AppError> {
        Ok(db
            .materials
            .find(doc! { "tutorEmail": email })
            .await?
            .try_collect()
            .await?)
    }

    pub async fn update(
        db: &Database,
        id: &ObjectId,
        req: &UpdateMaterialRequest,
    ) -> Result<(), AppError> {
        db.materials
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": {
                    "title": req.title.as_str(),
                    "imageUrl": req.image_url.as_str(),
                    "driveLink": req.drive_link.as_str(),
                    "updatedAt": DateTime::now(),
                } },
            )
            .await?;
        Ok(())
    }

    /// Returns false when the material does not exist (the admin surface
    /// reports that as 404; the tutor surface ignores it).
    pub async fn delete(db: &Database, id: &ObjectId) -> Result<bool, AppError> {
        let result = db.materials.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }
}
