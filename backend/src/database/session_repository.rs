use bson::{doc, oid::ObjectId, DateTime};
use futures_util::TryStreamExt;
use shared::{CreateSessionRequest, SessionStatus};

use super::{
    models::{SessionId, StudySession},
    Database,
};
use crate::error::AppError;

pub struct SessionRepository;

impl SessionRepository {
    /// Insert a new session. Status and fee are forced server-side: every
    /// session starts `pending` with a zero fee until an admin approves it.
    pub async fn create(db: &Database, req: &CreateSessionRequest) -> Result<SessionId, AppError> {
        let session = StudySession {
            id: SessionId::Canonical(ObjectId::new()),
            title: req.title.clone(),
            description: req.description.clone(),
            tutor_email: req.tutor_email.clone(),
            registration_fee: 0.0,
            status: SessionStatus::Pending,
            is_paid: None,
            created_at: Some(DateTime::now()),
            approved_at: None,
            rejected_at: None,
            resubmitted_at: None,
            rejection_reason: None,
            rejection_response: None,
        };
        db.sessions.insert_one(&session).await?;
        Ok(session.id)
    }

    pub async fn find_all(db: &Database) -> Result<Vec<StudySession>, AppError> {
        Ok(db.sessions.find(doc! {}).await?.try_collect().await?)
    }

    /// Two-step resolution: canonical ObjectId first, then the literal
    /// string. Legacy records kept their plain-string `_id`s and both id
    /// spaces are still live, so this must stay two separate lookups.
    pub async fn find_by_any_id(db: &Database, raw: &str) -> Result<Option<StudySession>, AppError> {
        if let Ok(oid) = ObjectId::parse_str(raw) {
            if let Some(session) = db.sessions.find_one(doc! { "_id": oid }).await? {
                return Ok(Some(session));
            }
        }
        Ok(db.sessions.find_one(doc! { "_id": raw }).await?)
    }

    pub async fn find_by_tutor(db: &Database, email: &str) -> Result<Vec<StudySession>, AppError> {
        Ok(db
            .sessions
            .find(doc! { "tutorEmail": email })
            .await?
            .try_collect()
            .await?)
    }

    /// Approved sessions only, used by the material-upload picker.
    pub async fn find_approved_by_tutor(
        db: &Database,
        email: &str,
    ) -> Result<Vec<StudySession>, AppError> {
        Ok(db
            .sessions
            .find(doc! { "tutorEmail": email, "status": "approved" })
            .await?
            .try_collect()
            .await?)
    }

    /// pending -> approved. The status guard makes this a single
    /// conditional update, so an approved session can never be moderated
    /// twice; returns false when nothing matched.
    pub async fn approve(
        db: &Database,
        id: &SessionId,
        is_paid: bool,
        registration_fee: f64,
    ) -> Result<bool, AppError> {
        let result = db
            .sessions
            .update_one(
                doc! { "_id": id.to_bson(), "status": "pending" },
                doc! { "$set": {
                    "status": "approved",
                    "isPaid": is_paid,
                    "registrationFee": registration_fee,
                    "approvedAt": DateTime::now(),
                } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    /// pending -> rejected, recording the reason shown to the tutor.
    pub async fn reject(
        db: &Database,
        id: &SessionId,
        reason: &str,
        response: &str,
    ) -> Result<bool, AppError> {
        let result = db
            .sessions
            .update_one(
                doc! { "_id": id.to_bson(), "status": "pending" },
                doc! { "$set": {
                    "status": "rejected",
                    "rejectionReason": reason,
                    "rejectionResponse": response,
                    "rejectedAt": DateTime::now(),
                } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    /// rejected -> pending (tutor resubmission).
    pub async fn resubmit(db: &Database, id: &SessionId) -> Result<bool, AppError> {
        let result = db
            .sessions
            .update_one(
                doc! { "_id": id.to_bson(), "status": "rejected" },
                doc! { "$set": { "status": "pending", "resubmittedAt": DateTime::now() } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    pub async fn delete(db: &Database, id: &SessionId) -> Result<bool, AppError> {
        let result = db
            .sessions
            .delete_one(doc! { "_id": id.to_bson() })
            .await?;
        Ok(result.deleted_count > 0)
    }
}
