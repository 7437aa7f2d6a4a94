use axum::{
    extract::{Path, State},
    Json,
};
use shared::{CreateReviewRequest, CreateReviewResponse, ReviewsResponse};
use tracing::info;

use crate::{
    database::{review_repository::ReviewRepository, Database},
    error::AppError,
};

/// Append a review. There is no edit or delete endpoint.
pub async fn create_review(
    State(db): State<Database>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<Json<CreateReviewResponse>, AppError> {
    info!(
        "[REVIEWS] {} rated session {} ({})",
        req.student_email, req.study_session_id, req.rating
    );

    let review_id = ReviewRepository::create(&db, &req).await?;

    Ok(Json(CreateReviewResponse {
        success: true,
        review_id: review_id.to_hex(),
    }))
}

pub async fn session_reviews(
    State(db): State<Database>,
    Path(session_id): Path<String>,
) -> Result<Json<ReviewsResponse>, AppError> {
    let reviews = ReviewRepository::find_by_session(&db, &session_id).await?;
    Ok(Json(ReviewsResponse {
        success: true,
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}
