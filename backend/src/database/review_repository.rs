use bson::{doc, oid::ObjectId, DateTime};
use futures_util::TryStreamExt;
use shared::CreateReviewRequest;

use super::{models::Review, Database};
use crate::error::AppError;

pub struct ReviewRepository;

impl ReviewRepository {
    pub async fn create(db: &Database, req: &CreateReviewRequest) -> Result<ObjectId, AppError> {
        let review = Review {
            id: ObjectId::new(),
            student_email: req.student_email.clone(),
            study_session_id: req.study_session_id.clone(),
            rating: req.rating,
            comment: req.comment.clone(),
            created_at: DateTime::now(),
        };
        db.reviews.insert_one(&review).await?;
        Ok(review.id)
    }

    pub async fn find_by_session(db: &Database, session_id: &str) -> Result<Vec<Review>, AppError> {
        Ok(db
            .reviews
            .find(doc! { "studySessionId": session_id })
            .await?
            .try_collect()
            .await?)
    }
}
