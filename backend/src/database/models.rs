//! Stored document types. Field names keep the legacy camelCase spelling
//! so documents written by earlier deployments keep deserializing.

use bson::{oid::ObjectId, Bson, DateTime};
use serde::{Deserialize, Serialize};
use shared::{
    BookingDetail, MaterialResponse, NoteResponse, ReviewResponse, SessionResponse,
    SessionStatus, UserInfo, UserRecord,
};

/// Session identifier. New sessions get ObjectIds; records migrated from
/// the old deployment kept their plain string `_id`s, and both id spaces
/// are still live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionId {
    Canonical(ObjectId),
    Legacy(String),
}

impl SessionId {
    /// Classify a request identifier: 24-character hex is canonical,
    /// anything else is a legacy string id.
    pub fn parse(raw: &str) -> Self {
        match ObjectId::parse_str(raw) {
            Ok(oid) => SessionId::Canonical(oid),
            Err(_) => SessionId::Legacy(raw.to_string()),
        }
    }

    pub fn to_bson(&self) -> Bson {
        match self {
            SessionId::Canonical(oid) => Bson::ObjectId(*oid),
            SessionId::Legacy(s) => Bson::String(s.clone()),
        }
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionId::Canonical(oid) => write!(f, "{}", oid.to_hex()),
            SessionId::Legacy(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub uid: String,
    pub display_name: String,
    pub email: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    #[serde(rename = "_id")]
    pub id: SessionId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub tutor_email: String,
    #[serde(default)]
    pub registration_fee: f64,
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resubmitted_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_response: Option<String>,
}

/// A student's claim on a session. `study_session_id` is stored as the
/// string form the client sent, matching how legacy bookings reference
/// their sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub student_email: String,
    pub study_session_id: String,
    pub tutor_email: String,
    pub session_title: String,
    #[serde(default)]
    pub registration_fee: f64,
    pub booked_at: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub student_email: String,
    pub study_session_id: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyMaterial {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub study_session_id: String,
    pub tutor_email: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub drive_link: String,
    pub uploaded_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

// --- DTO conversions -----------------------------------------------------

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        UserInfo {
            uid: user.uid,
            email: user.email,
            display_name: user.display_name,
            role: user.role,
            photo_url: user.photo_url,
        }
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        UserRecord {
            id: user.id.to_hex(),
            uid: user.uid,
            email: user.email,
            display_name: user.display_name,
            role: user.role,
            photo_url: user.photo_url,
            created_at: user.created_at.map(DateTime::to_chrono),
            updated_at: user.updated_at.map(DateTime::to_chrono),
        }
    }
}

impl From<StudySession> for SessionResponse {
    fn from(session: StudySession) -> Self {
        SessionResponse {
            id: session.id.to_string(),
            title: session.title,
            description: session.description,
            tutor_email: session.tutor_email,
            registration_fee: session.registration_fee,
            status: session.status,
            is_paid: session.is_paid,
            created_at: session.created_at.map(DateTime::to_chrono),
            approved_at: session.approved_at.map(DateTime::to_chrono),
            rejected_at: session.rejected_at.map(DateTime::to_chrono),
            resubmitted_at: session.resubmitted_at.map(DateTime::to_chrono),
            rejection_reason: session.rejection_reason,
            rejection_response: session.rejection_response,
        }
    }
}

impl From<Booking> for BookingDetail {
    fn from(booking: Booking) -> Self {
        BookingDetail {
            id: booking.id.to_hex(),
            student_email: booking.student_email,
            study_session_id: booking.study_session_id,
            tutor_email: booking.tutor_email,
            session_title: booking.session_title,
            registration_fee: booking.registration_fee,
            booked_at: booking.booked_at.to_chrono(),
            session_details: None,
        }
    }
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        ReviewResponse {
            id: review.id.to_hex(),
            student_email: review.student_email,
            study_session_id: review.study_session_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at.to_chrono(),
        }
    }
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        NoteResponse {
            id: note.id.to_hex(),
            email: note.email,
            title: note.title,
            description: note.description,
            created_at: note.created_at.to_chrono(),
            updated_at: note.updated_at.map(DateTime::to_chrono),
        }
    }
}

impl From<StudyMaterial> for MaterialResponse {
    fn from(material: StudyMaterial) -> Self {
        MaterialResponse {
            id: material.id.to_hex(),
            study_session_id: material.study_session_id,
            tutor_email: material.tutor_email,
            title: material.title,
            image_url: material.image_url,
            drive_link: material.drive_link,
            uploaded_at: material.uploaded_at.to_chrono(),
            updated_at: material.updated_at.map(DateTime::to_chrono),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn session_id_classifies_hex_as_canonical() {
        let oid = ObjectId::new();
        assert_eq!(
            SessionId::parse(&oid.to_hex()),
            SessionId::Canonical(oid)
        );
        assert_eq!(
            SessionId::parse("S1"),
            SessionId::Legacy("S1".to_string())
        );
    }

    #[test]
    fn session_id_round_trips_through_bson() {
        let oid = ObjectId::new();
        let canonical = bson::to_bson(&SessionId::Canonical(oid)).unwrap();
        assert_eq!(canonical, Bson::ObjectId(oid));
        assert_eq!(
            bson::from_bson::<SessionId>(canonical).unwrap(),
            SessionId::Canonical(oid)
        );

        let legacy = bson::to_bson(&SessionId::Legacy("S1".to_string())).unwrap();
        assert_eq!(legacy, Bson::String("S1".to_string()));
        assert_eq!(
            bson::from_bson::<SessionId>(legacy).unwrap(),
            SessionId::Legacy("S1".to_string())
        );
    }

    #[test]
    fn user_document_keeps_legacy_field_names() {
        let user = User {
            id: ObjectId::new(),
            uid: "u1".to_string(),
            display_name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            photo_url: Some("https://example.com/a.png".to_string()),
            role: "student".to_string(),
            created_at: Some(DateTime::now()),
            updated_at: None,
        };
        let document = bson::to_document(&user).unwrap();
        assert!(document.contains_key("_id"));
        assert!(document.contains_key("displayName"));
        assert!(document.contains_key("photoURL"));
        assert!(document.contains_key("createdAt"));
        assert!(!document.contains_key("updatedAt"));
    }

    #[test]
    fn legacy_session_document_deserializes() {
        // Migrated records: string _id, no timestamps, no moderation fields.
        let document = doc! {
            "_id": "S1",
            "title": "Algebra",
            "tutorEmail": "t@x.com",
            "status": "approved",
        };
        let session: StudySession = bson::from_document(document).unwrap();
        assert_eq!(session.id, SessionId::Legacy("S1".to_string()));
        assert_eq!(session.status, SessionStatus::Approved);
        assert_eq!(session.registration_fee, 0.0);
        assert!(session.created_at.is_none());
    }
}
