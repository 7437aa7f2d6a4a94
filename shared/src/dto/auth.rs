use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration request (idempotent on `uid`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub uid: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Registration response; exactly one of `user` (already registered) and
/// `user_id` (newly created) is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// User information (public, safe to send to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Full user record (moderation surface); carries the document id the
/// admin dashboard needs for role updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Login request; the uid must already be registered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Login success response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Identity posted to the cookie-token endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub uid: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Role lookup response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub role: String,
}

/// Role overwrite request (admin)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub role: String,
}

/// Query string for the admin user search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSearchQuery {
    pub q: String,
}

/// Bare success acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    pub success: bool,
}

/// Short human-readable acknowledgement (admin mutations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_uses_legacy_field_names() {
        let json = r#"{
            "uid": "u1",
            "name": "Alice",
            "email": "alice@example.com",
            "photoURL": "https://example.com/a.png"
        }"#;
        let req: RegisterUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.uid, "u1");
        assert_eq!(req.photo_url.as_deref(), Some("https://example.com/a.png"));
        assert!(req.role.is_none());
    }

    #[test]
    fn register_response_omits_absent_fields() {
        let response = RegisterUserResponse {
            message: "User created successfully".to_string(),
            user: None,
            user_id: Some("abc".to_string()),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"userId\":\"abc\""));
        assert!(!json.contains("user\":null"));
    }

    #[test]
    fn user_info_serializes_camel_case() {
        let info = UserInfo {
            uid: "u1".to_string(),
            email: "a@x.com".to_string(),
            display_name: "Alice".to_string(),
            role: "student".to_string(),
            photo_url: None,
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"displayName\":\"Alice\""));
        assert!(!json.contains("photoURL"));
    }
}
