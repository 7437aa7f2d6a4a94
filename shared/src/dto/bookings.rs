use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sessions::SessionResponse;

/// Booking request. `study_session_id` may be a canonical hex ObjectId or
/// a legacy plain-string session id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookSessionRequest {
    pub student_email: String,
    pub study_session_id: String,
    pub tutor_email: String,
    pub session_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_fee: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookSessionResponse {
    pub success: bool,
    pub message: String,
    pub booking_id: String,
}

/// Session ids already booked by a student, used by the client to gray
/// out booked sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookedSessionIdsResponse {
    pub success: bool,
    pub booked_sessions: Vec<String>,
}

/// One booking joined with the current state of its session. The session
/// may have been deleted since booking, hence the `Option`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    pub id: String,
    pub student_email: String,
    pub study_session_id: String,
    pub tutor_email: String,
    pub session_title: String,
    pub registration_fee: f64,
    pub booked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_details: Option<SessionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookedSessionsResponse {
    pub success: bool,
    pub booked_sessions: Vec<BookingDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_request_parses_legacy_wire_format() {
        let json = r#"{
            "studentEmail": "a@x.com",
            "studySessionId": "S1",
            "tutorEmail": "t@x.com",
            "sessionTitle": "Algebra"
        }"#;
        let req: BookSessionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.student_email, "a@x.com");
        assert_eq!(req.study_session_id, "S1");
        assert!(req.registration_fee.is_none());
    }

    #[test]
    fn ids_response_shape() {
        let response = BookedSessionIdsResponse {
            success: true,
            booked_sessions: vec!["S1".to_string(), "S2".to_string()],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":true,"bookedSessions":["S1","S2"]}"#);
    }
}
