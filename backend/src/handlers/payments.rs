use axum::{extract::State, Json};
use shared::{PaymentIntentRequest, PaymentIntentResponse};
use std::sync::Arc;
use tracing::info;

use crate::{error::AppError, services::stripe::StripeClient};

/// Create a card payment intent and hand the client secret back verbatim.
pub async fn create_payment_intent(
    State(stripe): State<Arc<StripeClient>>,
    Json(req): Json<PaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    info!("[PAYMENT] Creating intent for amount {}", req.amount);

    let client_secret = stripe
        .create_payment_intent(req.amount)
        .await
        .map_err(AppError::ExternalService)?;

    info!("[PAYMENT] ✅ Intent created");
    Ok(Json(PaymentIntentResponse { client_secret }))
}
