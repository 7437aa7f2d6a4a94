use bson::{doc, oid::ObjectId, DateTime};
use futures_util::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use shared::BookSessionRequest;

use super::{models::Booking, Database};
use crate::error::AppError;

pub struct BookingRepository;

impl BookingRepository {
    /// Insert a booking. At most one booking may exist per
    /// (studentEmail, studySessionId); the unique index created at startup
    /// enforces this, and the duplicate-key error becomes the 400
    /// "already booked" condition.
    pub async fn create(db: &Database, req: &BookSessionRequest) -> Result<ObjectId, AppError> {
        let booking = Booking {
            id: ObjectId::new(),
            student_email: req.student_email.clone(),
            study_session_id: req.study_session_id.clone(),
            tutor_email: req.tutor_email.clone(),
            session_title: req.session_title.clone(),
            registration_fee: req.registration_fee.unwrap_or(0.0),
            booked_at: DateTime::now(),
        };

        match db.bookings.insert_one(&booking).await {
            Ok(_) => Ok(booking.id),
            Err(err) if is_duplicate_key(&err) => {
                Err(AppError::Duplicate("Session already booked".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn find_by_student(db: &Database, email: &str) -> Result<Vec<Booking>, AppError> {
        Ok(db
            .bookings
            .find(doc! { "studentEmail": email })
            .await?
            .try_collect()
            .await?)
    }

    /// Only the referenced session ids, used by the client to gray out
    /// sessions the student already booked.
    pub async fn session_ids_by_student(
        db: &Database,
        email: &str,
    ) -> Result<Vec<String>, AppError> {
        let bookings = Self::find_by_student(db, email).await?;
        Ok(bookings
            .into_iter()
            .map(|booking| booking.study_session_id)
            .collect())
    }
}

/// Duplicate-key write error (server code 11000) from the unique index.
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) if write_error.code == 11000
    )
}
