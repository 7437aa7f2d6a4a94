use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

const STRIPE_API_URL: &str = "https://api.stripe.com/v1";

/// Thin client for the Stripe payment-intents API. Intents are created
/// without an idempotency key: repeated calls with the same amount create
/// distinct intents, matching the behavior the front-end expects.
pub struct StripeClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl StripeClient {
    pub fn new(secret_key: String) -> Self {
        Self::with_base_url(secret_key, STRIPE_API_URL)
    }

    pub fn with_base_url(secret_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            secret_key,
        }
    }

    /// Create a card payment intent and return the processor-issued client
    /// secret verbatim. `amount` is in major currency units.
    pub async fn create_payment_intent(&self, amount: f64) -> Result<String, String> {
        let url = format!("{}/payment_intents", self.base_url);
        let minor_units = to_minor_units(amount);

        debug!("Creating payment intent for {} minor units", minor_units);

        let params = [
            ("amount", minor_units.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            error!("Stripe API error: {}", response.status());
            return Err(format!("API error: {}", response.status()));
        }

        let intent: PaymentIntent = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(intent.client_secret)
    }
}

/// Convert a major-unit amount to the processor's integer minor units.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[derive(Deserialize)]
struct PaymentIntent {
    client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_unit_conversion() {
        assert_eq!(to_minor_units(10.0), 1000);
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(0.0), 0);
    }

    #[test]
    fn test_minor_unit_rounding() {
        // Binary float noise must not shave a cent off.
        assert_eq!(to_minor_units(0.29), 29);
        assert_eq!(to_minor_units(1.005), 100);
    }
}
