use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::{
    BookSessionRequest, BookSessionResponse, BookedSessionIdsResponse, BookedSessionsResponse,
    BookingDetail,
};
use tracing::{debug, info};

use crate::{
    database::{
        booking_repository::BookingRepository, session_repository::SessionRepository, Database,
    },
    error::AppError,
};

/// Book a session for a student. Booking the same (student, session) pair
/// twice fails with 400 "Session already booked".
pub async fn book_session(
    State(db): State<Database>,
    Json(req): Json<BookSessionRequest>,
) -> Result<(StatusCode, Json<BookSessionResponse>), AppError> {
    info!(
        "[BOOKING] {} booking session {}",
        req.student_email, req.study_session_id
    );

    let booking_id = BookingRepository::create(&db, &req).await?;

    info!("[BOOKING] ✅ Booked: {}", booking_id.to_hex());
    Ok((
        StatusCode::CREATED,
        Json(BookSessionResponse {
            success: true,
            message: "Session booked successfully".to_string(),
            booking_id: booking_id.to_hex(),
        }),
    ))
}

/// Session ids a student has already booked.
pub async fn booked_session_ids(
    State(db): State<Database>,
    Path(email): Path<String>,
) -> Result<Json<BookedSessionIdsResponse>, AppError> {
    let booked_sessions = BookingRepository::session_ids_by_student(&db, &email).await?;
    Ok(Json(BookedSessionIdsResponse {
        success: true,
        booked_sessions,
    }))
}

/// A student's bookings, each joined with the current session record,
/// one lookup per booking.
pub async fn student_booked_sessions(
    State(db): State<Database>,
    Path(email): Path<String>,
) -> Result<Json<BookedSessionsResponse>, AppError> {
    let bookings = BookingRepository::find_by_student(&db, &email).await?;
    debug!("[BOOKING] {} bookings for {}", bookings.len(), email);

    let mut booked_sessions = Vec::with_capacity(bookings.len());
    for booking in bookings {
        let session = SessionRepository::find_by_any_id(&db, &booking.study_session_id).await?;
        let mut detail = BookingDetail::from(booking);
        detail.session_details = session.map(Into::into);
        booked_sessions.push(detail);
    }

    Ok(Json(BookedSessionsResponse {
        success: true,
        booked_sessions,
    }))
}
