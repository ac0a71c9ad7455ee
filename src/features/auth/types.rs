//! Request and response types for auth-related API calls. These payloads
//! carry credentials and verification codes, so they must never be logged.

use crate::app_lib::session::UserInfo;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResendCodeRequest {
    pub email: String,
}

/// Generic `{ "message": ... }` acknowledgement used by several endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_serialization() {
        let raw = r#"{
            "token": "abc.def.ghi",
            "user": {"_id": "66b1", "name": "Ada", "email": "ada@example.com", "role": "user"}
        }"#;

        let response: LoginResponse = serde_json::from_str(raw).expect("Failed to deserialize");
        assert_eq!(response.token, "abc.def.ghi");
        assert_eq!(response.user.id, "66b1");
        assert_eq!(response.user.email, "ada@example.com");

        let json = serde_json::to_string(&response).expect("Failed to serialize");
        assert!(json.contains("abc.def.ghi"));
        assert!(json.contains("\"_id\":\"66b1\""));
    }

    #[test]
    fn test_message_response_tolerates_missing_field() {
        let response: MessageResponse = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(response.message, "");
    }
}
