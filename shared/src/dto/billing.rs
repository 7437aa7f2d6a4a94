use serde::{Deserialize, Serialize};

/// Payment-intent request; `amount` is in major currency units and may be
/// fractional (19.99 means $19.99).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    pub amount: f64,
}

/// The processor-issued client secret, passed through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// Chatbot request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
}

/// Chatbot reply; the chat surface always answers 200, substituting a
/// fixed apology text when the model endpoint fails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_response_is_camel_case() {
        let response = PaymentIntentResponse {
            client_secret: "pi_123_secret_456".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"clientSecret":"pi_123_secret_456"}"#);
    }
}
