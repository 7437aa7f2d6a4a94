use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a study session. Sessions are created `pending`,
/// moderated to `approved` or `rejected`, and a rejected session may be
/// resubmitted back to `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Approved,
    Rejected,
}

/// Session creation request (tutor side). Fee and status are set by the
/// server, not the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub title: String,
    pub description: String,
    pub tutor_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub success: bool,
    pub session_id: String,
}

/// One study session as returned by the API. `id` is the canonical hex
/// ObjectId for new records or the plain legacy string for migrated ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tutor_email: String,
    pub registration_fee: f64,
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resubmitted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_response: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionListResponse {
    pub success: bool,
    pub sessions: Vec<SessionResponse>,
}

/// Admin approval payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApproveSessionRequest {
    pub is_paid: bool,
    pub registration_fee: f64,
}

/// Admin rejection payload; both fields are shown to the tutor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RejectSessionRequest {
    pub reason: String,
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Pending).unwrap(),
            "\"pending\""
        );
        let status: SessionStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(status, SessionStatus::Approved);
    }

    #[test]
    fn approve_request_is_camel_case() {
        let json = r#"{"isPaid": true, "registrationFee": 25.0}"#;
        let req: ApproveSessionRequest = serde_json::from_str(json).unwrap();
        assert!(req.is_paid);
        assert_eq!(req.registration_fee, 25.0);
    }

    #[test]
    fn session_response_omits_moderation_fields_until_set() {
        let session = SessionResponse {
            id: "S1".to_string(),
            title: "Algebra".to_string(),
            description: String::new(),
            tutor_email: "t@x.com".to_string(),
            registration_fee: 0.0,
            status: SessionStatus::Pending,
            is_paid: None,
            created_at: None,
            approved_at: None,
            rejected_at: None,
            resubmitted_at: None,
            rejection_reason: None,
            rejection_response: None,
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"status\":\"pending\""));
        assert!(!json.contains("rejectionReason"));
        assert!(!json.contains("approvedAt"));
    }
}
