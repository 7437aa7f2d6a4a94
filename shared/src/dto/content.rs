use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Reviews -------------------------------------------------------------

/// Review submission; reviews are append-only, there is no edit or delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub student_email: String,
    pub study_session_id: String,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewResponse {
    pub success: bool,
    pub review_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub student_email: String,
    pub study_session_id: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub success: bool,
    pub reviews: Vec<ReviewResponse>,
}

// --- Notes ---------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub email: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteResponse {
    pub success: bool,
    pub note_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: String,
    pub email: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotesResponse {
    pub success: bool,
    pub notes: Vec<NoteResponse>,
}

// --- Study materials -----------------------------------------------------

/// Material upload; tied to an approved session of the uploading tutor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialRequest {
    pub study_session_id: String,
    pub tutor_email: String,
    pub title: String,
    pub image_url: String,
    pub drive_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialResponse {
    pub success: bool,
    pub material_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterialRequest {
    pub title: String,
    pub image_url: String,
    pub drive_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaterialResponse {
    pub id: String,
    pub study_session_id: String,
    pub tutor_email: String,
    pub title: String,
    pub image_url: String,
    pub drive_link: String,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsResponse {
    pub success: bool,
    pub materials: Vec<MaterialResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_request_parses_camel_case() {
        let json = r#"{
            "studentEmail": "a@x.com",
            "studySessionId": "S1",
            "rating": 5,
            "comment": "great"
        }"#;
        let req: CreateReviewRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.rating, 5);
        assert_eq!(req.study_session_id, "S1");
    }

    #[test]
    fn material_request_uses_drive_link_field() {
        let json = r#"{
            "studySessionId": "S1",
            "tutorEmail": "t@x.com",
            "title": "Slides",
            "imageUrl": "https://img",
            "driveLink": "https://drive"
        }"#;
        let req: CreateMaterialRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.drive_link, "https://drive");
    }
}
