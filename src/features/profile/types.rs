//! Wire types for the member profile endpoints. Field names follow the
//! backend's storage conventions (`_id`, camelCase) via serde renames.

use crate::app_lib::session::UserInfo;
use serde::{Deserialize, Serialize};

/// Full member record as returned by `/api/auth/profile`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub created_at: String,
}

impl Profile {
    /// Date portion of the ISO `createdAt` timestamp.
    pub fn member_since(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }

    /// Identity summary cached in the session store.
    pub fn as_user_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: Profile,
}

/// Editable subset sent to `/api/auth/profile/update`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub phone: String,
    pub bio: String,
    pub address: String,
    pub country: String,
    pub city: String,
    pub zip: String,
    pub profile_image: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateProfileResponse {
    #[serde(default)]
    pub message: String,
    pub user: Option<Profile>,
}

#[cfg(test)]
mod tests {
    use super::Profile;

    #[test]
    fn test_profile_deserializes_backend_field_names() {
        let raw = r#"{
            "_id": "66b1",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "0123456789",
            "role": "user",
            "isEmailVerified": true,
            "isSuspended": false,
            "bio": "",
            "createdAt": "2026-07-14T09:30:00.000Z"
        }"#;

        let profile: Profile = serde_json::from_str(raw).expect("Failed to deserialize");
        assert_eq!(profile.id, "66b1");
        assert!(profile.is_email_verified);
        assert!(!profile.is_suspended);
        assert_eq!(profile.member_since(), "2026-07-14");
        assert_eq!(profile.country, "");
    }

    #[test]
    fn test_member_since_handles_short_values() {
        let mut profile: Profile =
            serde_json::from_str(r#"{"_id":"1","name":"A","email":"a@b.c"}"#)
                .expect("Failed to deserialize");
        profile.created_at = "2026".to_string();
        assert_eq!(profile.member_since(), "2026");
    }
}
